//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically. One call to
//! [`Simulation::tick`] is one frame at the configured tick rate; elapsed wall
//! time never enters the physics.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::check_game_over;
use super::obstacle::Obstacle;
use super::state::{Phase, SimEvent, SimulationState, Snapshot};
use crate::config::Config;

/// Owns the world and the RNG that shapes it
#[derive(Debug, Clone)]
pub struct Simulation {
    config: Config,
    state: SimulationState,
    seed: u64,
    rng: Pcg32,
    /// Input events applied since the last tick; reported with the next tick
    pending: Vec<SimEvent>,
}

impl Simulation {
    /// Create a simulation in the running state with a fixed seed
    pub fn new(config: Config, seed: u64) -> Self {
        let state = SimulationState::new(&config);
        let mut sim = Self {
            config,
            state,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            pending: Vec::new(),
        };
        sim.reset();
        sim
    }

    /// Default-config simulation with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Config::default(), seed)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    /// Start a new run. Safe to call in either phase; the RNG stream continues
    /// so consecutive runs get different obstacles.
    pub fn reset(&mut self) {
        self.state = SimulationState::new(&self.config);
        self.pending.clear();
        log::info!("Run started (seed {})", self.seed);
    }

    /// Start a new run from a fresh seed
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.reset();
    }

    /// Give the player an upward kick. Replaces the current vertical velocity;
    /// ignored once the run is over.
    pub fn impulse(&mut self) {
        if self.state.is_over() {
            return;
        }
        self.state.entity.kick(self.config.impulse_velocity);
        self.pending.push(SimEvent::Flapped);
    }

    /// Advance the world by one tick
    pub fn tick(&mut self) {
        self.state.events.clear();
        self.state.events.append(&mut self.pending);

        let running = self.state.phase == Phase::Running;
        if running {
            self.state.ticks += 1;
            self.spawn_obstacle();
            for obstacle in &mut self.state.obstacles {
                obstacle.advance(self.config.scroll_step);
            }
            self.retire_obstacle();
        }

        if running || self.config.settle_after_game_over {
            self.state
                .entity
                .integrate(self.config.fall_acceleration, self.config.floor_y());
        }

        if running {
            let head = self.state.obstacles.front();
            if let Some(cause) = check_game_over(&self.state.entity, head, &self.config) {
                self.state.phase = Phase::Over;
                self.state.game_over_cause = Some(cause);
                self.state.events.push(SimEvent::GameOver { cause });
                log::info!(
                    "Game over after {} ticks: {:?}",
                    self.state.ticks,
                    cause
                );
            }
        }
    }

    /// Append a new obstacle at the right edge when the queue is empty or the
    /// newest obstacle has scrolled far enough in
    fn spawn_obstacle(&mut self) {
        let spawn_line = self.config.world_width - self.config.spawn_threshold;
        let due = match self.state.obstacles.back() {
            None => true,
            Some(tail) => tail.x < spawn_line,
        };
        if !due {
            return;
        }

        let (lo, hi) = self.config.gap_center_range();
        let gap_center = self.rng.random_range(lo..=hi) as f32;
        let x = self.config.world_width;
        self.state.obstacles.push_back(Obstacle::new(x, gap_center));
        self.state.events.push(SimEvent::Spawned { x, gap_center });
        log::debug!("Spawned obstacle at x={} gap={}", x, gap_center);
    }

    /// Drop the oldest obstacle once it has fully left the screen (at most one per tick)
    fn retire_obstacle(&mut self) {
        let offscreen = self
            .state
            .obstacles
            .front()
            .is_some_and(|head| head.is_offscreen(&self.config));
        if offscreen {
            self.state.obstacles.pop_front();
            self.state.events.push(SimEvent::Retired);
            log::debug!("Retired obstacle, {} remain", self.state.obstacles.len());
        }
    }

    /// Mutable access for tests that need to stage a specific situation
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }
}
