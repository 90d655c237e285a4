//! Headless host for the flocking core: loads settings, drives the
//! simulator on a fixed tick and writes JSON-lines frames.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use flock_core::{display_name, FlockConfiguration, FlockSimulator, Vector2D};
use flock_shared::{AgentSnapshot, FlockSettings, FrameSnapshot, Vec2};

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless boids flocking simulation", long_about = None)]
pub struct Args {
    /// JSON settings file; missing fields use the defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of agents to spawn (overrides the settings file)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Random seed (overrides the settings file)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 600)]
    pub ticks: u64,

    /// Simulated seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Write every k-th frame; the first and last frames are always written
    #[arg(short, long, default_value_t = 1)]
    pub every: u64,

    /// Write frames to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// Reads the settings file named in `args`, if any, and applies the
/// command-line overrides.
pub fn load_settings(args: &Args) -> Result<FlockSettings> {
    let mut settings = match &args.config {
        Some(path) => {
            log::info!("Loading settings from {}", path.display());
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            FlockSettings::from_json_str(&json)
                .with_context(|| format!("Invalid settings in {}", path.display()))?
        }
        None => FlockSettings::default(),
    };

    if let Some(count) = args.count {
        settings.count = count;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    Ok(settings)
}

pub fn configuration(settings: &FlockSettings) -> FlockConfiguration {
    FlockConfiguration {
        count: settings.count,
        speed: settings.speed,
        neighbor_radius: settings.neighbor_radius,
        separation_strength: settings.separation_strength,
        alignment_strength: settings.alignment_strength,
        cohesion_strength: settings.cohesion_strength,
        area_size: Vector2D::new(settings.width, settings.height),
        margin: settings.margin,
    }
}

/// Builds a simulator from `settings` and spawns the configured agents.
pub fn build_simulator(settings: &FlockSettings) -> Result<FlockSimulator> {
    let config = configuration(settings);
    let mut flock = match settings.seed {
        Some(seed) => FlockSimulator::with_seed(config, seed),
        None => FlockSimulator::new(config),
    }
    .context("Invalid flock configuration")?;

    flock.spawn_configured();
    log::info!(
        "Spawned {} agents in {}x{} (seed {})",
        flock.len(),
        settings.width,
        settings.height,
        flock.seed()
    );

    Ok(flock)
}

fn vec2(v: Vector2D) -> Vec2 {
    Vec2::new(v.x, v.y)
}

pub fn snapshot(flock: &FlockSimulator) -> FrameSnapshot {
    let agents = flock
        .agents()
        .iter()
        .enumerate()
        .map(|(index, agent)| AgentSnapshot {
            name: display_name(index),
            position: vec2(agent.position),
            heading: vec2(agent.heading),
            rotation_degrees: agent.rotation_degrees(),
        })
        .collect();

    FrameSnapshot {
        tick: flock.ticks(),
        elapsed: flock.elapsed(),
        agents,
    }
}

/// Fixed-step driver standing in for a host's frame loop.
pub struct Runner {
    flock: FlockSimulator,
    dt: f32,
    every: u64,
}

impl Runner {
    pub fn new(flock: FlockSimulator, dt: f32, every: u64) -> Self {
        Self {
            flock,
            dt,
            every: every.max(1),
        }
    }

    pub fn flock(&self) -> &FlockSimulator {
        &self.flock
    }

    /// Steps `ticks` times, writing the initial frame, every k-th frame and
    /// the final frame as one JSON object per line. Returns the number of
    /// frames written.
    pub fn run<W: Write>(&mut self, ticks: u64, out: &mut W) -> Result<u64> {
        let mut frames = 0;
        self.write_frame(out)?;
        frames += 1;

        for tick in 1..=ticks {
            self.flock
                .step(self.dt)
                .with_context(|| format!("Step {} failed", tick))?;

            if tick % self.every == 0 || tick == ticks {
                self.write_frame(out)?;
                frames += 1;
            }
        }

        out.flush().context("Failed to flush frames")?;
        log::info!("Simulated {} ticks, wrote {} frames", ticks, frames);
        Ok(frames)
    }

    fn write_frame<W: Write>(&self, out: &mut W) -> Result<()> {
        let frame = snapshot(&self.flock);
        serde_json::to_writer(&mut *out, &frame).context("Failed to encode frame")?;
        writeln!(out).context("Failed to write frame")?;
        log::debug!("Frame at tick {} written", frame.tick);
        Ok(())
    }
}
