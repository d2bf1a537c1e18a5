//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable row and node order
//! - No rendering or platform dependencies

pub mod collision;
pub mod goal;
pub mod motion;
pub mod path;
pub mod rows;
pub mod scroll;
pub mod state;
pub mod tick;

pub use collision::{check_hit, nearest_slot};
pub use goal::{Goal, GoalOutcome};
pub use motion::{change_direction, integrate};
pub use path::{PathTracker, Waypoint};
pub use rows::{RowWindow, generate_row};
pub use scroll::ScrollClock;
pub use state::{
    Character, Direction, GameEvent, GameState, Layout, Node, NodeKind, NodeType, Row,
};
pub use tick::{TickInput, tick};
