//! Character/node collision detection
//!
//! Only the active row is tested. Instead of searching every node, the
//! character's x is mapped onto the row's slot range and rounded to the
//! nearest slot, which relies on nodes being evenly spaced and the tolerance
//! being small compared to the spacing.

use super::state::{Character, Node, Row};
use crate::config::GameConfig;
use crate::round_half_up;

/// Slot index nearest to `x` in a row of `count` nodes starting at `start`
pub fn nearest_slot(x: f32, start: f32, count: usize, spacing: f32) -> usize {
    if count <= 1 {
        return 0;
    }
    // round(percent * (count - 1)) with percent clamped to [0, 1]
    let last = (count - 1) as f32;
    let position = ((x - start) / spacing).clamp(0.0, last);
    (round_half_up(position) as usize).min(count - 1)
}

/// Return the node the character is touching in `row`, if any
///
/// `row_y` is the row's current screen y. A hit needs the character to have
/// reached the row (within `hit_tolerance`) and to be within `hit_tolerance`
/// of the nearest slot laterally. Consumed nodes are parked off-field so they
/// never pass the lateral test.
pub fn check_hit<'a>(
    character: &Character,
    row: &'a mut Row,
    row_y: f32,
    config: &GameConfig,
) -> Option<&'a mut Node> {
    let tolerance = config.hit_tolerance;

    if character.pos.y < row_y - tolerance {
        return None;
    }

    let Some(layout) = config.layout_for_count(row.nodes.len()) else {
        log::warn!("Row with {} nodes matches no layout", row.nodes.len());
        return None;
    };
    let geom = config.row_geometry(layout);

    let slot = nearest_slot(character.pos.x, geom.start, geom.count, config.line_spacing);
    let node = row.nodes.get_mut(slot)?;

    if (character.pos.x - node.x).abs() > tolerance {
        return None;
    }

    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Layout, NodeKind, NodeType};

    fn row(layout: Layout, config: &GameConfig) -> Row {
        let geom = config.row_geometry(layout);
        let nodes = (0..geom.count)
            .map(|i| {
                Node::new(
                    geom.start + i as f32 * config.line_spacing,
                    NodeKind::Goal(NodeType::new("blue", "#00f", 1)),
                )
            })
            .collect();
        Row { layout, nodes }
    }

    fn character_at(x: f32, y: f32) -> Character {
        Character::new(x, y, 0)
    }

    #[test]
    fn test_nearest_slot() {
        assert_eq!(nearest_slot(30.0, 30.0, 7, 100.0), 0);
        assert_eq!(nearest_slot(330.0, 30.0, 7, 100.0), 3);
        assert_eq!(nearest_slot(630.0, 30.0, 7, 100.0), 6);
        // Halfway between slots rounds up
        assert_eq!(nearest_slot(380.0, 30.0, 7, 100.0), 4);
        assert_eq!(nearest_slot(379.0, 30.0, 7, 100.0), 3);
        // Outside the row clamps to the ends
        assert_eq!(nearest_slot(-500.0, 30.0, 7, 100.0), 0);
        assert_eq!(nearest_slot(5000.0, 80.0, 6, 100.0), 5);
    }

    #[test]
    fn test_hit_on_node() {
        let config = GameConfig::default();
        let mut row = row(Layout::A, &config);
        let character = character_at(330.0, 250.0);
        let node = check_hit(&character, &mut row, 250.0, &config).unwrap();
        assert_eq!(node.x, 330.0);
    }

    #[test]
    fn test_b_layout_hit() {
        let config = GameConfig::default();
        let mut row = row(Layout::B, &config);
        let character = character_at(580.5, 250.0);
        let node = check_hit(&character, &mut row, 249.0, &config).unwrap();
        assert_eq!(node.x, 580.0);
    }

    #[test]
    fn test_tolerance_boundary() {
        let config = GameConfig {
            hit_tolerance: 2.0,
            ..Default::default()
        };
        let mut row = row(Layout::A, &config);

        let exact = character_at(232.0, 250.0);
        assert!(check_hit(&exact, &mut row, 250.0, &config).is_some());

        let left = character_at(228.0, 250.0);
        assert!(check_hit(&left, &mut row, 250.0, &config).is_some());

        let past = character_at(232.01, 250.0);
        assert!(check_hit(&past, &mut row, 250.0, &config).is_none());
    }

    #[test]
    fn test_row_not_reached() {
        let config = GameConfig::default();
        let mut row = row(Layout::A, &config);
        let character = character_at(330.0, 250.0);

        // Row still below the character by more than the tolerance
        assert!(check_hit(&character, &mut row, 251.5, &config).is_none());
        // Exactly at the tolerance counts as arrived
        assert!(check_hit(&character, &mut row, 251.0, &config).is_some());
    }

    #[test]
    fn test_row_edges() {
        let config = GameConfig::default();
        let mut a = row(Layout::A, &config);
        let left_edge = character_at(30.0, 250.0);
        assert_eq!(check_hit(&left_edge, &mut a, 250.0, &config).unwrap().x, 30.0);
        let right_edge = character_at(630.0, 250.0);
        assert_eq!(check_hit(&right_edge, &mut a, 250.0, &config).unwrap().x, 630.0);

        // Character on an A position over a B row touches nothing
        let mut b = row(Layout::B, &config);
        assert!(check_hit(&left_edge, &mut b, 250.0, &config).is_none());
        assert!(check_hit(&right_edge, &mut b, 250.0, &config).is_none());
    }

    #[test]
    fn test_consumed_node_is_never_hit_again() {
        let config = GameConfig::default();
        let mut row = row(Layout::A, &config);
        let character = character_at(430.0, 250.0);

        check_hit(&character, &mut row, 250.0, &config)
            .unwrap()
            .consume();
        assert!(check_hit(&character, &mut row, 250.0, &config).is_none());
        assert!(check_hit(&character, &mut row, 248.0, &config).is_none());
    }

    #[test]
    fn test_unknown_row_shape() {
        let config = GameConfig::default();
        let mut row = Row {
            layout: Layout::A,
            nodes: vec![Node::new(330.0, NodeKind::Empty)],
        };
        let character = character_at(330.0, 250.0);
        assert!(check_hit(&character, &mut row, 250.0, &config).is_none());
    }
}
