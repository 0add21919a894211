//! Idle/demo player
//!
//! Steers toward the gap of the next obstacle the box still has to clear.
//! Because a flap replaces the vertical velocity, flapping every tick climbs
//! at a steady rate and stopping lets gravity take over, so a single
//! threshold on the box's bottom edge is enough to thread every gap.

use super::entity::Entity;
use super::obstacle::Obstacle;
use super::state::Snapshot;
use crate::config::Config;

/// Distance kept between the box's bottom edge and the lower gap edge
pub const AUTOPILOT_SLACK: f32 = 10.0;

/// Stateless flap decision
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    /// Obstacle whose caps have not fully passed the box yet
    pub fn target<'a>(snapshot: &Snapshot<'a>, config: &Config) -> Option<&'a Obstacle> {
        let entity: &Entity = snapshot.entity;
        snapshot
            .obstacles
            .iter()
            .find(|o| o.cap_left(config) + config.cap_width >= entity.pos.x)
    }

    /// Whether to flap this tick
    pub fn should_flap(snapshot: &Snapshot<'_>, config: &Config) -> bool {
        if snapshot.is_over() {
            return false;
        }
        let gap_center = Self::target(snapshot, config)
            .map(|o| o.gap_center)
            .unwrap_or(config.world_height / 2.0);
        snapshot.entity.bottom() > gap_center + config.half_gap - AUTOPILOT_SLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{InputEvent, Simulation};

    #[test]
    fn test_flaps_when_low() {
        let mut sim = Simulation::with_seed(4);
        sim.tick();
        sim.state_mut().obstacles[0].gap_center = 300.0;
        assert!(!Autopilot::should_flap(&sim.snapshot(), sim.config()));

        // Fall until below the middle band
        while !Autopilot::should_flap(&sim.snapshot(), sim.config()) {
            sim.tick();
        }
        assert!(sim.state().entity.bottom() > 300.0 + 60.0 - AUTOPILOT_SLACK);
        assert!(!sim.is_over());
    }

    #[test]
    fn test_targets_next_unpassed_obstacle() {
        let config = Config::default();
        let mut sim = Simulation::new(config.clone(), 4);
        sim.tick();
        let snapshot = sim.snapshot();
        let target = Autopilot::target(&snapshot, &config).map(|o| o.x);
        assert_eq!(target, Some(399.0));
    }

    #[test]
    fn test_survives_many_obstacles() {
        for seed in [1_u64, 7, 12345, 99999] {
            let mut sim = Simulation::with_seed(seed);
            let mut retired = 0;
            for _ in 0..3000 {
                if Autopilot::should_flap(&sim.snapshot(), sim.config()) {
                    sim.handle(InputEvent::Flap);
                }
                sim.tick();
                retired += sim
                    .state()
                    .events
                    .iter()
                    .filter(|e| matches!(e, crate::sim::SimEvent::Retired))
                    .count();
                assert!(!sim.is_over(), "seed {} died at tick {}", seed, sim.state().ticks);
            }
            assert!(retired >= 10);
        }
    }
}
