//! Collision detection between the player box and obstacles
//!
//! The test is deliberately coarse: the caps are wider than the pipe bodies,
//! so the horizontal band spanned by the caps is treated as one solid column
//! with a hole (the gap) in it. Inside that band the box must be entirely
//! within the gap. Touching a gap edge exactly counts as safe.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::obstacle::Obstacle;
use crate::config::Config;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Player touched the floor
    Floor,
    /// Player hit a pipe
    Obstacle,
}

/// True while the box shares any column with the caps (edges inclusive)
pub fn overlaps_horizontally(entity: &Entity, obstacle: &Obstacle, config: &Config) -> bool {
    let cap_left = obstacle.cap_left(config);
    entity.right() >= cap_left && entity.pos.x <= cap_left + config.cap_width
}

/// True when the box lies entirely within the gap band (edges inclusive)
pub fn within_gap(entity: &Entity, obstacle: &Obstacle, config: &Config) -> bool {
    entity.pos.y >= obstacle.gap_top(config) && entity.bottom() <= obstacle.gap_bottom(config)
}

/// Two-phase test against a single obstacle
pub fn collides(entity: &Entity, obstacle: &Obstacle, config: &Config) -> bool {
    overlaps_horizontally(entity, obstacle, config) && !within_gap(entity, obstacle, config)
}

/// True once the box rests on the floor
pub fn on_floor(entity: &Entity, config: &Config) -> bool {
    entity.pos.y >= config.floor_y()
}

/// Check the terminal conditions for the current tick.
///
/// Only the oldest obstacle is tested: anything behind it has not reached the
/// player yet, and the head is only retired well after the player is past it.
pub fn check_game_over(
    entity: &Entity,
    head: Option<&Obstacle>,
    config: &Config,
) -> Option<GameOverCause> {
    if on_floor(entity, config) {
        return Some(GameOverCause::Floor);
    }
    match head {
        Some(obstacle) if collides(entity, obstacle, config) => Some(GameOverCause::Obstacle),
        _ => None,
    }
}
