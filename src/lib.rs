//! Node Fall - A zig-zag node falling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scrolling, rows, collisions, goals)
//! - `render`: Display list generation and the drawing surface seam
//! - `session`: Frame loop driver (pause gating, scheduling, score output)
//! - `input`: Key code mapping
//! - `config`: Data-driven game sizing and balance

pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod session;
pub mod sim;

pub use config::GameConfig;
pub use error::{Error, Result};
pub use input::Command;
pub use session::{LoopControl, Session};

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Distance between grid lines (and between nodes in a row)
    pub const LINE_SPACING: f32 = 100.0;
    /// Number of grid columns
    pub const GRID_COUNT: usize = 6;
    /// Horizontal margin on each side of the grid
    pub const X_MARGIN: f32 = 30.0;
    /// Scroll and lateral speed (pixels per tick)
    pub const GRAVITY: f32 = 9.8 / 10.0 / 2.0;

    /// Rows kept in the on-screen window
    pub const ROW_CAPACITY: usize = 14;
    /// Row eligible for collision testing
    pub const ACTIVE_ROW_INDEX: usize = 5;
    /// Lateral/vertical hit tolerance
    pub const HIT_TOLERANCE: f32 = 1.0;

    /// Chance that a generated node is a goal node
    pub const GOAL_NODE_PERCENT: f32 = 0.5;
    pub const GOAL_LENGTH_MIN: usize = 3;
    pub const GOAL_LENGTH_MAX: usize = 7;

    /// Path correction kicks in past `tolerance * CORRECTION_RANGE`
    pub const CORRECTION_RANGE: f32 = 100.0;
    /// Fraction of the remaining gap closed per tick
    pub const CORRECTION_RATE: f32 = 1.0 / 20.0;

    /// Where consumed nodes are parked (far outside the field)
    pub const CONSUMED_X: f32 = -10_000.0;

    /// Character sprite center (pixel offset inside the image)
    pub const SPRITE_CENTER: (f32, f32) = (33.0, 55.0);
    /// Character tilt while moving (radians, 45 degrees)
    pub const TILT: f32 = std::f32::consts::FRAC_PI_4;
}

/// Canvas edge length for a grid of `grid_count` cells of `spacing` plus margins
#[inline]
pub fn canvas_size(spacing: f32, grid_count: usize, margin: f32) -> f32 {
    spacing * grid_count as f32 + 2.0 * margin
}

/// Round to the nearest integer, halves going up
#[inline]
pub fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}
