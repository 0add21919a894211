//! The player box

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacle::Rect;
use crate::config::Config;

/// The controllable entity: a square that only moves vertically
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    /// Vertical velocity in pixels/tick (positive is down)
    pub velocity: f32,
    /// Side length of the square hit-box
    pub size: f32,
}

impl Entity {
    /// Spawn at the start position: fixed x, vertically centered top edge
    pub fn new(config: &Config) -> Self {
        Self {
            pos: Vec2::new(config.player_x, config.world_height / 2.0),
            velocity: config.initial_fall_velocity,
            size: config.player_size,
        }
    }

    /// Advance one tick: move by the current velocity, then accelerate,
    /// then clamp to the floor
    pub fn integrate(&mut self, fall_acceleration: f32, floor_y: f32) {
        self.pos.y += self.velocity;
        self.velocity += fall_acceleration;
        self.pos.y = self.pos.y.min(floor_y);
    }

    /// Replace (not add to) the vertical velocity
    #[inline]
    pub fn kick(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    pub fn hitbox(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_position() {
        let config = Config::default();
        let entity = Entity::new(&config);
        assert_eq!(entity.pos, Vec2::new(50.0, 200.0));
        assert_eq!(entity.velocity, 1.0);
        assert_eq!(entity.hitbox(), Rect::new(50.0, 200.0, 30.0, 30.0));
    }

    #[test]
    fn test_integrate_moves_then_accelerates() {
        let config = Config::default();
        let mut entity = Entity::new(&config);

        entity.integrate(0.15, config.floor_y());
        assert_eq!(entity.pos.y, 201.0);
        assert!((entity.velocity - 1.15).abs() < 1e-6);

        entity.integrate(0.15, config.floor_y());
        assert!((entity.pos.y - 202.15).abs() < 1e-4);
    }

    #[test]
    fn test_integrate_clamps_to_floor() {
        let config = Config::default();
        let mut entity = Entity::new(&config);
        entity.velocity = 500.0;

        entity.integrate(0.15, config.floor_y());
        assert_eq!(entity.pos.y, config.floor_y());
        assert_eq!(entity.bottom(), config.world_height);
    }

    #[test]
    fn test_kick_replaces_velocity() {
        let config = Config::default();
        let mut entity = Entity::new(&config);
        entity.velocity = 6.0;
        entity.kick(-3.0);
        entity.kick(-3.0);
        assert_eq!(entity.velocity, -3.0);
    }
}
