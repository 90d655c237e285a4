use crate::error::FlockError;
use crate::Vector2D;

/// Tuning for one simulation, fixed at construction.
///
/// The three strengths are meant to lie in `[0, 1]` but are used as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlockConfiguration {
    /// Agents spawned by [`crate::FlockSimulator::spawn_configured`].
    pub count: usize,
    /// Distance travelled per unit of simulated time.
    pub speed: f32,
    pub neighbor_radius: f32,
    pub separation_strength: f32,
    pub alignment_strength: f32,
    pub cohesion_strength: f32,
    /// Width and height of the nominal area, origin at `(0, 0)`.
    pub area_size: Vector2D,
    /// Distance past an edge an agent may travel before it wraps.
    pub margin: f32,
}

impl FlockConfiguration {
    pub const DEFAULT_COUNT: usize = 5;
    pub const DEFAULT_SPEED: f32 = 5.0;
    pub const DEFAULT_NEIGHBOR_RADIUS: f32 = 92.0;
    pub const DEFAULT_SEPARATION_STRENGTH: f32 = 0.1;
    pub const DEFAULT_ALIGNMENT_STRENGTH: f32 = 0.5;
    pub const DEFAULT_COHESION_STRENGTH: f32 = 0.25;
    pub const DEFAULT_MARGIN: f32 = 32.0;

    /// Default tuning over an area of `width` x `height`.
    pub fn with_area(width: f32, height: f32) -> Self {
        Self {
            count: Self::DEFAULT_COUNT,
            speed: Self::DEFAULT_SPEED,
            neighbor_radius: Self::DEFAULT_NEIGHBOR_RADIUS,
            separation_strength: Self::DEFAULT_SEPARATION_STRENGTH,
            alignment_strength: Self::DEFAULT_ALIGNMENT_STRENGTH,
            cohesion_strength: Self::DEFAULT_COHESION_STRENGTH,
            area_size: Vector2D::new(width, height),
            margin: Self::DEFAULT_MARGIN,
        }
    }

    /// Rejects values that would break the stepping rules. Strengths only
    /// scale steering terms and are not checked.
    pub fn validate(&self) -> Result<(), FlockError> {
        if !non_negative(self.speed) {
            return Err(FlockError::InvalidSpeed(self.speed));
        }

        if !non_negative(self.neighbor_radius) {
            return Err(FlockError::InvalidRadius(self.neighbor_radius));
        }

        let Vector2D { x: width, y: height } = self.area_size;
        if !non_negative(width) || !non_negative(height) {
            return Err(FlockError::InvalidAreaSize { width, height });
        }

        if !non_negative(self.margin) {
            return Err(FlockError::InvalidMargin(self.margin));
        }

        Ok(())
    }
}

/// Finite and `>= 0`. NaN fails.
pub(crate) fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
