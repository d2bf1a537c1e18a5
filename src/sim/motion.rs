//! Character motion and steering
//!
//! The character moves one `gravity` step per tick in its heading and is
//! pulled back toward its tracked waypoint when it drifts too far from the
//! zig-zag path.

use super::state::{Character, Direction};
use crate::config::GameConfig;
use crate::consts::CORRECTION_RATE;

/// Advance the character's lateral position by one tick
pub fn integrate(character: &mut Character, waypoint_x: Option<f32>, config: &GameConfig) {
    let (min_x, max_x) = config.lateral_bounds();

    let mut x = character.pos.x + config.gravity * character.direction.sign();
    x = x.clamp(min_x, max_x);

    if let Some(target) = waypoint_x {
        let gap = target - x;
        if gap.abs() > config.correction_threshold() {
            x = (x + gap * CORRECTION_RATE).clamp(min_x, max_x);
        }
    }

    character.pos.x = x;
}

/// Heading after landing on a node at `node_x`
///
/// Margin nodes force the character back into the field; anywhere else the
/// player's latest request wins. Returns the heading and whether it was forced.
pub fn change_direction(node_x: f32, requested: Direction, config: &GameConfig) -> (Direction, bool) {
    let (min_x, max_x) = config.lateral_bounds();
    if node_x <= min_x {
        (Direction::Right, true)
    } else if node_x >= max_x {
        (Direction::Left, true)
    } else {
        (requested, false)
    }
}
