//! Simulation tick
//!
//! Core game loop that advances the simulation by one frame.

use super::collision::check_hit;
use super::goal::GoalOutcome;
use super::motion::{change_direction, integrate};
use super::state::{Direction, GameEvent, GameState, NodeKind};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Heading requested by the player since the last tick
    pub direction: Option<Direction>,
}

/// Advance the game state by one tick. A paused game is left untouched.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.paused {
        return;
    }

    state.events.clear();
    state.time_ticks += 1;

    if let Some(direction) = input.direction {
        state.character.requested = direction;
    }

    // Scroll and roll the row window
    state.scroll.tick(&state.config);
    if state.scroll.crossed_half_cycle(&state.config) {
        state.rows.advance(&state.config, &mut state.rng);
        state.events.push(GameEvent::RowsRolled);
    }

    // Keep the path lattice in step with the field
    let parity = state.rows.active_row().layout.parity();
    state.path.step(state.config.gravity, parity);

    resolve_hit(state, parity);

    let waypoint_x = state.path.waypoint_x(state.character.waypoint);
    integrate(&mut state.character, waypoint_x, &state.config);
}

/// Land on the active row's node under the character, if any
fn resolve_hit(state: &mut GameState, parity: f32) {
    let active_index = state.rows.active_index();
    let row_y = state.row_y(active_index);

    let (node_x, kind) = {
        let row = state.rows.active_row_mut();
        let Some(node) = check_hit(&state.character, row, row_y, &state.config) else {
            return;
        };
        let hit = (node.x, node.kind.clone());
        node.consume();
        hit
    };
    state.character.pos.x = node_x;

    log::debug!("Hit node at x={} ({:?})", node_x, kind);
    state.events.push(GameEvent::NodeHit {
        x: node_x,
        tag: match &kind {
            NodeKind::Goal(node_type) => node_type.tag.clone(),
            NodeKind::Empty => "empty".to_string(),
        },
    });

    match state.goal.on_node_hit(&kind, &state.config, &mut state.rng) {
        GoalOutcome::Ignored => {}
        GoalOutcome::Advanced { next } => {
            state.events.push(GameEvent::GoalAdvanced { next });
        }
        GoalOutcome::Reset => {
            state.events.push(GameEvent::GoalReset);
        }
        GoalOutcome::Completed { length } => {
            state.score += length as u64;
            log::info!(
                "Goal complete (length {}), score {}, next goal length {}",
                length,
                state.score,
                state.goal.len()
            );
            state.events.push(GameEvent::GoalCompleted {
                length,
                score: state.score,
            });
        }
    }

    steer(state, node_x, parity);
}

/// Apply the direction-change rule and keep the waypoint index on the path
fn steer(state: &mut GameState, node_x: f32, parity: f32) {
    let character = &mut state.character;
    let previous = character.direction;
    let (direction, forced) = change_direction(node_x, character.requested, &state.config);

    if forced {
        character.requested = direction;
        state.events.push(GameEvent::DirectionForced { direction });
    }

    let mut waypoint = if direction == previous {
        state.path.advance(character.waypoint, direction)
    } else if previous == Direction::None {
        state.path.anchor(node_x, direction, parity)
    } else {
        // Reversing: the tracked waypoint turns around at this node too
        character.waypoint
    };

    let slack = state.config.half_spacing() / 2.0;
    if direction != Direction::None && !state.path.tracks(waypoint, node_x, slack) {
        log::debug!("Waypoint {} is off node x={}, re-anchoring", waypoint, node_x);
        waypoint = state.path.anchor(node_x, direction, parity);
    }

    character.waypoint = waypoint;
    character.direction = direction;
}
