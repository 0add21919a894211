//! Flappy Box - a side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacles, physics, collisions, game state)
//! - `config`: Data-driven world geometry and physics tuning
//! - `renderer`: Backend-agnostic draw list built from a simulation snapshot

pub mod config;
pub mod renderer;
pub mod sim;

pub use config::Config;
pub use sim::{Phase, Simulation, Snapshot};

/// Default tuning values (the numbers the game was balanced with)
pub mod consts {
    /// Nominal simulation rate; one tick is one displayed frame at this rate
    pub const TICK_RATE: f32 = 60.0;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 400.0;

    /// Pipe body (the long part of each barrier)
    pub const PIPE_WIDTH: f32 = 30.0;
    pub const PIPE_HEIGHT: f32 = 250.0;
    /// Pipe cap (the lip facing the gap); wider than the body
    pub const CAP_WIDTH: f32 = 40.0;
    pub const CAP_HEIGHT: f32 = 20.0;
    /// How far the cap sticks out left of the body
    pub const CAP_OVERHANG: f32 = 5.0;
    /// Half the height of the passable gap
    pub const HALF_GAP: f32 = 60.0;
    /// Gap centers are kept this far from the top and bottom of the world
    pub const GAP_CENTER_MARGIN: f32 = 100.0;

    /// Obstacles scroll left this far every tick
    pub const SCROLL_STEP: f32 = 1.0;
    /// A new obstacle spawns once the newest one is this far from the right edge
    pub const SPAWN_THRESHOLD: f32 = 200.0;

    /// Player box
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_SIZE: f32 = 30.0;

    /// Downward velocity right after a reset (pixels/tick)
    pub const INITIAL_FALL_VELOCITY: f32 = 1.0;
    /// Added to the vertical velocity every tick (pixels/tick²)
    pub const FALL_ACCELERATION: f32 = 0.15;
    /// Vertical velocity set by a flap (negative is up)
    pub const IMPULSE_VELOCITY: f32 = -3.0;
}
