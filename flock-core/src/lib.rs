#![cfg_attr(not(feature = "std"), no_std)]

//! Flocking ("boids") simulation core.
//!
//! A [`FlockSimulator`] owns a flat collection of [`AgentState`] records and
//! advances them with [`FlockSimulator::step`]. Each tick every agent scans
//! all others within the neighbor radius, blends separation, alignment and
//! cohesion into a new heading, moves along it and wraps around the area
//! edges. Rendering and scheduling belong to the host.

extern crate alloc;

pub mod behavior;
mod config;
mod error;
mod flock;

pub use config::FlockConfiguration;
pub use error::FlockError;
pub use flock::FlockSimulator;

/// A 2D vector used for positions and headings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector obtained by rotating "up" `(0, 1)` counter-clockwise by
    /// `degrees` around the z axis.
    pub fn from_rotation_degrees(degrees: f32) -> Self {
        let radians = degrees.to_radians();
        #[cfg(feature = "std")]
        let (sin, cos) = (radians.sin(), radians.cos());
        #[cfg(not(feature = "std"))]
        let (sin, cos) = (libm::sinf(radians), libm::cosf(radians));

        Self { x: -sin, y: cos }
    }

    /// Inverse of [`Vector2D::from_rotation_degrees`], in `[-180, 180]`.
    pub fn rotation_degrees(&self) -> f32 {
        #[cfg(feature = "std")]
        let radians = (-self.x).atan2(self.y);
        #[cfg(not(feature = "std"))]
        let radians = libm::atan2f(-self.x, self.y);

        radians.to_degrees()
    }

    pub fn magnitude(&self) -> f32 {
        #[cfg(feature = "std")]
        {
            (self.x * self.x + self.y * self.y).sqrt()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrtf(self.x * self.x + self.y * self.y)
        }
    }

    /// Returns the unit vector in the same direction, or zero for a
    /// zero-length input.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
            }
        } else {
            Self::zero()
        }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn distance(&self, other: &Vector2D) -> f32 {
        (*self - *other).magnitude()
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl core::ops::Div<f32> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl core::ops::SubAssign for Vector2D {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

/// A single flocking agent.
///
/// Agents carry no identity beyond their index in the simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentState {
    /// Already-wrapped position.
    pub position: Vector2D,
    /// Unit forward direction.
    pub heading: Vector2D,
}

impl AgentState {
    pub fn new(position: Vector2D, heading: Vector2D) -> Self {
        Self { position, heading }
    }

    pub fn from_rotation_degrees(position: Vector2D, degrees: f32) -> Self {
        Self::new(position, Vector2D::from_rotation_degrees(degrees))
    }

    /// Presentation rotation around z, in degrees, with 0 meaning "up".
    pub fn rotation_degrees(&self) -> f32 {
        self.heading.rotation_degrees()
    }
}

/// Display label for the agent at `index`, numbered from one.
pub fn display_name(index: usize) -> alloc::string::String {
    alloc::format!("Boid #{}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_vector2d_magnitude() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_vector2d_normalize() {
        let v = Vector2D::new(3.0, 4.0);
        let normalized = v.normalize();
        assert!((normalized.magnitude() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_vector2d_normalize_zero_is_zero() {
        let normalized = Vector2D::zero().normalize();
        assert!(normalized.is_zero());
        assert!(!normalized.x.is_nan());
    }

    #[test]
    fn test_vector2d_operations() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);

        assert_eq!(v1 + v2, Vector2D::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vector2D::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(v2 / 2.0, Vector2D::new(1.5, 2.0));

        let mut acc = v1;
        acc -= v2;
        assert_eq!(acc, Vector2D::new(-2.0, -2.0));
    }

    #[test]
    fn test_rotation_zero_points_up() {
        let up = Vector2D::from_rotation_degrees(0.0);
        assert!(up.x.abs() < EPS);
        assert!((up.y - 1.0).abs() < EPS);
    }

    #[test]
    fn test_rotation_quarter_turn_points_left() {
        let left = Vector2D::from_rotation_degrees(90.0);
        assert!((left.x + 1.0).abs() < EPS);
        assert!(left.y.abs() < EPS);
    }

    #[test]
    fn test_rotation_round_trip() {
        for degrees in [-179.0_f32, -90.0, -12.5, 0.0, 45.0, 135.0, 179.0] {
            let agent = AgentState::from_rotation_degrees(Vector2D::zero(), degrees);
            assert!((agent.heading.magnitude() - 1.0).abs() < EPS);
            assert!(
                (agent.rotation_degrees() - degrees).abs() < 1e-3,
                "{} != {}",
                agent.rotation_degrees(),
                degrees
            );
        }
    }

    #[test]
    fn test_display_name_is_one_based() {
        assert_eq!(display_name(0), "Boid #1");
        assert_eq!(display_name(41), "Boid #42");
    }
}
