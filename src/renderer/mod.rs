//! Rendering module
//!
//! Turns a simulation snapshot into a flat list of filled rectangles. Any
//! backend (canvas 2D, terminal, GPU) only has to know how to fill a rect.

pub mod scene;

pub use scene::{Color, DrawCommand, colors, draw_list};
