//! Draw list generation

use crate::config::Config;
use crate::sim::{Rect, Snapshot};

/// RGBA color, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b, 1.0])
    }

    /// CSS `rgba()` string for canvas-style backends
    pub fn to_css(&self) -> String {
        let [r, g, b, a] = self.0;
        format!(
            "rgba({}, {}, {}, {})",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            a
        )
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(0.678, 0.847, 0.902); // light blue
    pub const PLAYER: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const PIPE: Color = Color::rgb(0.0, 0.502, 0.0);
    pub const PIPE_CAP: Color = Color::rgb(0.0, 0.502, 0.0);
}

/// A single primitive, drawn in list order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
}

/// Build the frame: background, player box, then each obstacle's two pipes
/// (body plus cap each), oldest obstacle first
pub fn draw_list(snapshot: &Snapshot<'_>, config: &Config) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(2 + snapshot.obstacles.len() * 4);

    commands.push(DrawCommand::FillRect {
        rect: Rect::new(0.0, 0.0, config.world_width, config.world_height),
        color: colors::BACKGROUND,
    });
    commands.push(DrawCommand::FillRect {
        rect: snapshot.entity.hitbox(),
        color: colors::PLAYER,
    });

    for obstacle in snapshot.obstacles {
        for (rect, color) in [
            (obstacle.top_rect(config), colors::PIPE),
            (obstacle.top_cap_rect(config), colors::PIPE_CAP),
            (obstacle.bottom_rect(config), colors::PIPE),
            (obstacle.bottom_cap_rect(config), colors::PIPE_CAP),
        ] {
            commands.push(DrawCommand::FillRect { rect, color });
        }
    }

    commands
}
