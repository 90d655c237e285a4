#![cfg_attr(not(feature = "std"), no_std)]

//! Data exchanged between the flocking core and its hosts: the settings a
//! host reads from its configuration source and the per-frame snapshots it
//! presents.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// A 2D point or direction in simulation coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Host-side flock configuration. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlockSettings {
    pub count: usize,
    pub speed: f32,
    pub neighbor_radius: f32,
    pub separation_strength: f32,
    pub alignment_strength: f32,
    pub cohesion_strength: f32,
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for FlockSettings {
    fn default() -> Self {
        Self {
            count: 5,
            speed: 5.0,
            neighbor_radius: 92.0,
            separation_strength: 0.1,
            alignment_strength: 0.5,
            cohesion_strength: 0.25,
            width: 800.0,
            height: 600.0,
            margin: 32.0,
            seed: None,
        }
    }
}

#[cfg(feature = "std")]
impl FlockSettings {
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One agent as presented to a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub name: String,
    pub position: Vec2,
    pub heading: Vec2,
    /// Rotation around z in degrees, 0 meaning "up"
    pub rotation_degrees: f32,
}

/// All agents after a given tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub elapsed: f64,
    pub agents: Vec<AgentSnapshot>,
}
