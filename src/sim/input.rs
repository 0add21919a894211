//! Discrete input events
//!
//! Frontends translate keys, taps and buttons into these and hand them to
//! [`Simulation::handle`]; they never touch simulation state directly.

use serde::{Deserialize, Serialize};

use super::tick::Simulation;

/// A single player action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Upward kick (space bar, tap, click)
    Flap,
    /// Start a new run (restart button)
    Restart,
}

impl Simulation {
    /// Apply one input event. Flaps are dropped after game over.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Flap => {
                if !self.is_over() {
                    self.impulse();
                }
            }
            InputEvent::Restart => self.reset(),
        }
    }
}
