//! World geometry and physics tuning
//!
//! Every number the simulation uses lives here so a frontend can load a
//! different feel from JSON without touching the simulation code. Missing
//! fields fall back to the defaults in [`crate::consts`].

use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,

    // === Obstacles ===
    pub pipe_width: f32,
    pub pipe_height: f32,
    pub cap_width: f32,
    pub cap_height: f32,
    pub cap_overhang: f32,
    pub half_gap: f32,
    pub gap_center_margin: f32,
    pub scroll_step: f32,
    pub spawn_threshold: f32,

    // === Player ===
    pub player_x: f32,
    pub player_size: f32,
    pub initial_fall_velocity: f32,
    pub fall_acceleration: f32,
    pub impulse_velocity: f32,

    /// Keep integrating the player after game over so it drops onto the
    /// floor; when false the whole world freezes on the game-over tick.
    pub settle_after_game_over: bool,

    // === Timing ===
    /// Nominal ticks per second the frontend should drive
    pub tick_rate: f32,
    pub max_substeps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            cap_width: CAP_WIDTH,
            cap_height: CAP_HEIGHT,
            cap_overhang: CAP_OVERHANG,
            half_gap: HALF_GAP,
            gap_center_margin: GAP_CENTER_MARGIN,
            scroll_step: SCROLL_STEP,
            spawn_threshold: SPAWN_THRESHOLD,

            player_x: PLAYER_X,
            player_size: PLAYER_SIZE,
            initial_fall_velocity: INITIAL_FALL_VELOCITY,
            fall_acceleration: FALL_ACCELERATION,
            impulse_velocity: IMPULSE_VELOCITY,

            settle_after_game_over: true,

            tick_rate: TICK_RATE,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl Config {
    /// Default configuration sized to a specific playfield
    pub fn with_world(width: f32, height: f32) -> Self {
        Self {
            world_width: width,
            world_height: height,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("malformed config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the constants describe a playable world
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.world_width > 0.0 && self.world_height > 0.0,
            "world must have a positive size (got {}x{})",
            self.world_width,
            self.world_height
        );
        ensure!(
            self.pipe_width > 0.0 && self.cap_width > 0.0 && self.cap_height >= 0.0,
            "pipe and cap dimensions must be positive"
        );
        ensure!(self.half_gap > 0.0, "half_gap must be positive");
        ensure!(
            self.player_size > 0.0 && self.player_size <= 2.0 * self.half_gap,
            "player_size {} does not fit through a gap of {}",
            self.player_size,
            2.0 * self.half_gap
        );
        ensure!(
            self.gap_center_margin >= self.half_gap + self.cap_height,
            "gap_center_margin {} would push a cap outside the playfield (need >= {})",
            self.gap_center_margin,
            self.half_gap + self.cap_height
        );
        ensure!(
            self.gap_center_margin <= self.world_height / 2.0,
            "gap_center_margin {} leaves no room for gap centers in a world {} high",
            self.gap_center_margin,
            self.world_height
        );
        ensure!(self.scroll_step > 0.0, "scroll_step must be positive");
        ensure!(
            self.spawn_threshold > self.scroll_step && self.spawn_threshold < self.world_width,
            "spawn_threshold must lie between scroll_step and world_width"
        );
        ensure!(self.fall_acceleration >= 0.0, "fall_acceleration must not be negative");
        ensure!(self.tick_rate > 0.0, "tick_rate must be positive");
        ensure!(self.max_substeps > 0, "max_substeps must be at least 1");
        Ok(())
    }

    /// Inclusive integer range gap centers are drawn from
    pub fn gap_center_range(&self) -> (i32, i32) {
        let lo = self.gap_center_margin.ceil() as i32;
        let hi = (self.world_height - self.gap_center_margin).floor() as i32;
        (lo, hi.max(lo))
    }

    /// Lowest y the player's top edge can reach (standing on the floor)
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.world_height - self.player_size
    }

    /// Fixed timestep in seconds for one tick
    #[inline]
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flappy_box_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {:#}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Load config from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config =
            Self::from_json(&json).with_context(|| format!("loading config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gap_center_range(), (100, 300));
        assert_eq!(config.floor_y(), 370.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "world_width": 600, "half_gap": 70 }"#).unwrap();
        assert_eq!(config.world_width, 600.0);
        assert_eq!(config.half_gap, 70.0);
        assert_eq!(config.world_height, WORLD_HEIGHT);
        assert_eq!(config.fall_acceleration, FALL_ACCELERATION);
        assert!(config.settle_after_game_over);
    }

    #[test]
    fn test_rejects_cap_outside_playfield() {
        let err = Config::from_json(r#"{ "gap_center_margin": 50 }"#).unwrap_err();
        assert!(format!("{:#}", err).contains("gap_center_margin"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(Config::from_json("{ not json").is_err());
    }

    #[test]
    fn test_gap_range_scales_with_height() {
        let config = Config::with_world(400.0, 600.0);
        assert!(config.validate().is_ok());
        assert_eq!(config.gap_center_range(), (100, 500));
    }

    #[test]
    fn test_roundtrip_preserves_flag() {
        let config = Config {
            settle_after_game_over: false,
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }
}
