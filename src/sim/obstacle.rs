//! Scrolling gated obstacles
//!
//! An obstacle is a pair of pipes, one hanging from above and one standing
//! below, with a fixed vertical gap between their caps. Only the horizontal
//! position changes after creation; every rectangle is derived on demand.
//!
//! ```text
//!      |  |        <- top body     (pipe_width x pipe_height)
//!     [____]       <- top cap      (cap_width x cap_height)
//!
//!        g         <- gap center, half_gap above and below is passable
//!      ____
//!     [    ]       <- bottom cap
//!      |  |        <- bottom body
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Axis-aligned rectangle in world space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A scrolling barrier pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge of the pipe bodies
    pub x: f32,
    /// Vertical center of the passable gap
    pub gap_center: f32,
}

impl Obstacle {
    pub fn new(x: f32, gap_center: f32) -> Self {
        Self { x, gap_center }
    }

    /// Scroll left by one step
    #[inline]
    pub fn advance(&mut self, step: f32) {
        self.x -= step;
    }

    /// Upper edge of the gap band
    #[inline]
    pub fn gap_top(&self, config: &Config) -> f32 {
        self.gap_center - config.half_gap
    }

    /// Lower edge of the gap band
    #[inline]
    pub fn gap_bottom(&self, config: &Config) -> f32 {
        self.gap_center + config.half_gap
    }

    /// Left edge of the caps (they overhang the bodies)
    #[inline]
    pub fn cap_left(&self, config: &Config) -> f32 {
        self.x - config.cap_overhang
    }

    /// Right edge of the pipe bodies; the obstacle retires once this is left of zero
    #[inline]
    pub fn right_edge(&self, config: &Config) -> f32 {
        self.x + config.pipe_width
    }

    pub fn is_offscreen(&self, config: &Config) -> bool {
        self.right_edge(config) < 0.0
    }

    /// Body of the pipe hanging from above. Ends `half_gap + cap_height`
    /// above the gap center, with the cap filling the rest up to the gap.
    pub fn top_rect(&self, config: &Config) -> Rect {
        let y = self.gap_top(config) - config.cap_height - config.pipe_height;
        Rect::new(self.x, y, config.pipe_width, config.pipe_height)
    }

    /// Body of the pipe standing below. Starts at `half_gap + cap_height`
    /// below the gap center rather than at `half_gap`: the cap sits between
    /// the gap and the body instead of overlapping the gap band, so the drawn
    /// opening matches the one collision tests against.
    pub fn bottom_rect(&self, config: &Config) -> Rect {
        let y = self.gap_bottom(config) + config.cap_height;
        Rect::new(self.x, y, config.pipe_width, config.pipe_height)
    }

    /// Lip at the lower end of the top pipe, touching the gap
    pub fn top_cap_rect(&self, config: &Config) -> Rect {
        let y = self.gap_top(config) - config.cap_height;
        Rect::new(self.cap_left(config), y, config.cap_width, config.cap_height)
    }

    /// Lip at the upper end of the bottom pipe, touching the gap
    pub fn bottom_cap_rect(&self, config: &Config) -> Rect {
        Rect::new(
            self.cap_left(config),
            self.gap_bottom(config),
            config.cap_width,
            config.cap_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_scrolls_left() {
        let mut obstacle = Obstacle::new(400.0, 200.0);
        obstacle.advance(1.0);
        obstacle.advance(1.0);
        assert_eq!(obstacle.x, 398.0);
        assert_eq!(obstacle.gap_center, 200.0);
    }

    #[test]
    fn test_rects_frame_the_gap() {
        let config = Config::default();
        let obstacle = Obstacle::new(100.0, 200.0);

        let top_cap = obstacle.top_cap_rect(&config);
        let bottom_cap = obstacle.bottom_cap_rect(&config);
        assert_eq!(top_cap.bottom(), 140.0);
        assert_eq!(bottom_cap.top(), 260.0);
        assert_eq!(top_cap.left(), 95.0);
        assert_eq!(top_cap.right(), 135.0);

        let top = obstacle.top_rect(&config);
        let bottom = obstacle.bottom_rect(&config);
        assert_eq!(top, Rect::new(100.0, -130.0, 30.0, 250.0));
        assert_eq!(top.bottom(), top_cap.top());
        assert_eq!(bottom, Rect::new(100.0, 280.0, 30.0, 250.0));
        assert_eq!(bottom.top(), bottom_cap.bottom());
    }

    #[test]
    fn test_bottom_cap_does_not_intrude_into_gap() {
        let config = Config::default();
        let obstacle = Obstacle::new(100.0, 200.0);
        let gap_bottom = obstacle.gap_bottom(&config);

        assert_eq!(obstacle.bottom_cap_rect(&config).top(), gap_bottom);
        assert_eq!(
            obstacle.bottom_rect(&config).top(),
            gap_bottom + config.cap_height
        );
        assert_eq!(obstacle.top_cap_rect(&config).bottom(), obstacle.gap_top(&config));
    }

    #[test]
    fn test_caps_stay_inside_playfield_at_range_ends() {
        let config = Config::default();
        let (lo, hi) = config.gap_center_range();

        let high = Obstacle::new(0.0, lo as f32);
        assert!(high.top_cap_rect(&config).top() >= 0.0);

        let low = Obstacle::new(0.0, hi as f32);
        assert!(low.bottom_cap_rect(&config).bottom() <= config.world_height);
    }

    #[test]
    fn test_offscreen_uses_body_right_edge() {
        let config = Config::default();
        assert!(!Obstacle::new(-30.0, 200.0).is_offscreen(&config));
        assert!(Obstacle::new(-30.5, 200.0).is_offscreen(&config));
    }
}
