//! Per-agent steering rules and the wrap-around boundary.
//!
//! Everything here reads a snapshot slice and returns new values, so a
//! whole tick can be computed before any agent is written back.

use crate::{AgentState, FlockConfiguration, Vector2D};

/// Steering terms accumulated from one agent's neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Steering {
    pub separation: Vector2D,
    pub alignment: Vector2D,
    pub cohesion: Vector2D,
    pub neighbors: usize,
}

impl Steering {
    /// Unnormalized sum of the agent's own heading and all three terms.
    pub fn blend(&self, heading: Vector2D) -> Vector2D {
        heading + self.alignment + self.cohesion + self.separation
    }
}

/// Computes the steering terms for `agents[index]` against every other
/// agent in `agents`.
///
/// Neighbors are agents strictly closer than the neighbor radius. Their
/// influence falls off linearly from 1 at zero distance to 0 at the radius.
pub fn steering(index: usize, agents: &[AgentState], config: &FlockConfiguration) -> Steering {
    let agent = &agents[index];
    let radius = config.neighbor_radius;

    let mut result = Steering::default();
    let mut center = Vector2D::zero();

    for (other_index, other) in agents.iter().enumerate() {
        if other_index == index {
            continue;
        }

        let offset = other.position - agent.position;
        let distance = offset.magnitude();
        if distance >= radius {
            continue;
        }

        let amount = 1.0 - distance / radius;
        result.separation -= offset * amount * config.separation_strength;
        result.alignment += other.heading * amount * config.alignment_strength;
        center += other.position;
        result.neighbors += 1;
    }

    if result.neighbors > 0 {
        center = center / result.neighbors as f32;
        result.cohesion = (center - agent.position).normalize() * config.cohesion_strength;
    }

    result
}

/// Normalized blend of `heading` and `steering`. A zero blend keeps the
/// direction of the previous heading, normalized.
pub fn next_heading(heading: Vector2D, steering: &Steering) -> Vector2D {
    let force = steering.blend(heading).normalize();
    if force.is_zero() {
        heading.normalize()
    } else {
        force
    }
}

/// Folds `position` back into the area when it has left it by more than
/// `margin` on either axis. Each axis is shifted at most once.
pub fn wrap(position: Vector2D, area: Vector2D, margin: f32) -> Vector2D {
    Vector2D::new(
        wrap_axis(position.x, area.x, margin),
        wrap_axis(position.y, area.y, margin),
    )
}

fn wrap_axis(value: f32, size: f32, margin: f32) -> f32 {
    if value < -margin {
        value + size + margin
    } else if value > size + margin {
        value - (size + margin)
    } else {
        value
    }
}

/// State of `agents[index]` after `dt` of simulated time.
pub fn advance(
    index: usize,
    agents: &[AgentState],
    config: &FlockConfiguration,
    dt: f32,
) -> (AgentState, Steering) {
    let agent = &agents[index];
    let steering = steering(index, agents, config);
    let heading = next_heading(agent.heading, &steering);
    let moved = agent.position + heading * config.speed * dt;
    let position = wrap(moved, config.area_size, config.margin);

    (AgentState::new(position, heading), steering)
}
