use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::behavior;
use crate::config::non_negative;
use crate::{AgentState, FlockConfiguration, FlockError, Vector2D};

/// Owns the agents of one flock and advances them tick by tick.
///
/// The host drives the simulation: [`FlockSimulator::spawn`] once, then
/// [`FlockSimulator::step`] every tick, reading [`FlockSimulator::agents`]
/// back for presentation.
#[derive(Debug, Clone)]
pub struct FlockSimulator {
    config: FlockConfiguration,
    agents: Vec<AgentState>,
    scratch: Vec<AgentState>,
    rng: ChaCha8Rng,
    seed: u64,
    ticks: u64,
    elapsed: f64,
}

impl FlockSimulator {
    /// Creates an empty simulator seeded from OS entropy.
    #[cfg(feature = "std")]
    pub fn new(config: FlockConfiguration) -> Result<Self, FlockError> {
        let mut seed = [0u8; 8];
        getrandom::getrandom(&mut seed).map_err(FlockError::Entropy)?;
        Self::with_seed(config, u64::from_le_bytes(seed))
    }

    /// Creates an empty simulator whose spawns are reproducible for `seed`.
    pub fn with_seed(config: FlockConfiguration, seed: u64) -> Result<Self, FlockError> {
        config.validate()?;
        log::debug!(
            "flock created: area {}x{}, radius {}, seed {}",
            config.area_size.x,
            config.area_size.y,
            config.neighbor_radius,
            seed
        );

        Ok(Self {
            config,
            agents: Vec::new(),
            scratch: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            ticks: 0,
            elapsed: 0.0,
        })
    }

    /// Appends `count` agents at random positions inside the area with
    /// random headings.
    pub fn spawn(&mut self, count: usize) {
        let area = self.config.area_size;
        let rng = &mut self.rng;
        self.agents
            .extend((0..count).map(|_| random_agent(rng, area)));
        log::debug!("spawned {} agents, {} total", count, self.agents.len());
    }

    /// Like [`FlockSimulator::spawn`], drawing from `rng` instead of the
    /// simulator's own source.
    pub fn spawn_with<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        let area = self.config.area_size;
        self.agents
            .extend((0..count).map(|_| random_agent(rng, area)));
        log::debug!("spawned {} agents, {} total", count, self.agents.len());
    }

    /// Spawns the configured number of agents.
    pub fn spawn_configured(&mut self) {
        self.spawn(self.config.count);
    }

    /// Places an agent explicitly. The state is used as given.
    pub fn add_agent(&mut self, agent: AgentState) {
        self.agents.push(agent);
    }

    /// Advances every agent by `dt` of simulated time.
    ///
    /// All new states are computed from the agents as they were when the
    /// call started and committed together, so the result does not depend
    /// on agent order. A negative or non-finite `dt` is rejected without
    /// touching any agent.
    pub fn step(&mut self, dt: f32) -> Result<(), FlockError> {
        if !non_negative(dt) {
            return Err(FlockError::InvalidTimeStep(dt));
        }

        let agents = &self.agents;
        let config = &self.config;
        let mut neighbor_links = 0;

        self.scratch.clear();
        self.scratch.extend((0..agents.len()).map(|index| {
            let (next, steering) = behavior::advance(index, agents, config, dt);
            neighbor_links += steering.neighbors;
            next
        }));
        core::mem::swap(&mut self.agents, &mut self.scratch);

        self.ticks += 1;
        self.elapsed += f64::from(dt);
        log::trace!(
            "tick {}: {} agents, {} neighbor links",
            self.ticks,
            self.agents.len(),
            neighbor_links
        );

        Ok(())
    }

    pub fn agents(&self) -> &[AgentState] {
        &self.agents
    }

    pub fn configuration(&self) -> &FlockConfiguration {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Seed of the simulator's random source.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of completed steps.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Sum of every accepted `dt`.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

fn random_agent<R: Rng + ?Sized>(rng: &mut R, area: Vector2D) -> AgentState {
    let position = Vector2D::new(rng.gen_range(0.0..=area.x), rng.gen_range(0.0..=area.y));
    let degrees = rng.gen_range(-180.0..=180.0);
    AgentState::from_rotation_degrees(position, degrees)
}
