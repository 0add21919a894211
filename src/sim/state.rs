//! Simulation state and the read-only snapshot handed to frontends
//!
//! Everything a frontend needs to draw a frame or restore a run lives in
//! [`SimulationState`]. Only [`super::Simulation`] mutates it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::collision::GameOverCause;
use super::entity::Entity;
use super::obstacle::Obstacle;
use crate::config::Config;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Obstacles scroll, input is accepted
    #[default]
    Running,
    /// Run ended; frozen until reset
    Over,
}

/// Things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A new obstacle entered at the right edge
    Spawned { x: f32, gap_center: f32 },
    /// The oldest obstacle left the screen
    Retired,
    /// An impulse was applied
    Flapped,
    /// The run just ended
    GameOver { cause: GameOverCause },
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    /// Obstacles, oldest (leftmost) first
    pub obstacles: VecDeque<Obstacle>,
    /// The player box
    pub entity: Entity,
    /// Current phase
    pub phase: Phase,
    /// Ticks since the last reset
    pub ticks: u64,
    /// Why the run ended; set on the game-over tick and kept until reset
    pub game_over_cause: Option<GameOverCause>,
    /// Events produced by the last tick, plus inputs applied just before it
    #[serde(skip)]
    pub events: Vec<SimEvent>,
}

impl SimulationState {
    /// Fresh state at the start position with an empty obstacle queue
    pub fn new(config: &Config) -> Self {
        Self {
            obstacles: VecDeque::new(),
            entity: Entity::new(config),
            phase: Phase::Running,
            ticks: 0,
            game_over_cause: None,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Borrow a read-only view for rendering
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            entity: &self.entity,
            obstacles: &self.obstacles,
            phase: self.phase,
            ticks: self.ticks,
            game_over_cause: self.game_over_cause,
            events: &self.events,
        }
    }
}

/// Read-only view of the world for the presentation layer
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub entity: &'a Entity,
    pub obstacles: &'a VecDeque<Obstacle>,
    pub phase: Phase,
    pub ticks: u64,
    pub game_over_cause: Option<GameOverCause>,
    pub events: &'a [SimEvent],
}

impl Snapshot<'_> {
    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Why the run ended, for as long as it stays over
    #[inline]
    pub fn game_over_cause(&self) -> Option<GameOverCause> {
        self.game_over_cause
    }

    /// True only on the tick the run ended
    pub fn just_ended(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, SimEvent::GameOver { .. }))
    }
}
