//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Obstacles kept in spawn order (oldest first)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod input;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{GameOverCause, check_game_over, collides};
pub use entity::Entity;
pub use input::InputEvent;
pub use obstacle::{Obstacle, Rect};
pub use state::{Phase, SimEvent, SimulationState, Snapshot};
pub use tick::Simulation;
