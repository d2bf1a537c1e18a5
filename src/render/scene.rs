//! Display list generation
//!
//! Grid, nodes, character sprite and goal HUD, all in canvas pixels.

use glam::Vec2;

use super::Surface;
use crate::consts::SPRITE_CENTER;
use crate::sim::{GameState, Layout, NodeKind};

/// Node glyph radius for goal and empty nodes
const GOAL_NODE_RADIUS: f32 = 10.0;
const EMPTY_NODE_RADIUS: f32 = 5.0;

/// Goal HUD glyphs
const HUD_RADIUS: f32 = 8.0;
const HUD_DONE_RADIUS: f32 = 4.0;
const HUD_STEP: f32 = 24.0;
const HUD_Y: f32 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Line { from: Vec2, to: Vec2 },
    Circle { center: Vec2, radius: f32, fill: String },
    Image { offset: Vec2 },
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
}

/// One frame's worth of draw commands
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn build(state: &GameState) -> Self {
        let mut scene = Self::default();
        let size = state.config.canvas_size();
        scene.commands.push(DrawCommand::Clear {
            width: size,
            height: size,
        });
        scene.grid(state);
        scene.nodes(state);
        scene.character(state);
        scene.hud(state);
        scene
    }

    /// Diagonal grid lines, aligned so their crossings sit on the rows' nodes
    fn grid(&mut self, state: &GameState) {
        let config = &state.config;
        let spacing = config.line_spacing;
        let size = config.canvas_size();

        // A rows sit on line crossings at the cell corners
        let Some(top) = state.rows.get(0) else {
            return;
        };
        let mut origin_y = state.row_y(0);
        if top.layout == Layout::B {
            origin_y -= config.half_spacing();
        }

        let cells_down = (size / spacing).ceil() as usize + 1;
        for i in 0..config.grid_count {
            let left = config.x_margin + i as f32 * spacing;
            let right = left + spacing;
            for j in 0..=cells_down {
                let top_y = origin_y + j as f32 * spacing;
                let bottom_y = top_y + spacing;
                self.commands.push(DrawCommand::Line {
                    from: Vec2::new(left, top_y),
                    to: Vec2::new(right, bottom_y),
                });
                self.commands.push(DrawCommand::Line {
                    from: Vec2::new(right, top_y),
                    to: Vec2::new(left, bottom_y),
                });
            }
        }
    }

    fn nodes(&mut self, state: &GameState) {
        let (min_x, max_x) = state.config.lateral_bounds();
        for (index, row) in state.rows.iter().enumerate() {
            let y = state.row_y(index);
            for node in row.nodes.iter().filter(|n| !n.is_consumed()) {
                if node.x < min_x || node.x > max_x {
                    continue;
                }
                let (radius, fill) = match &node.kind {
                    NodeKind::Goal(node_type) => (GOAL_NODE_RADIUS, node_type.color.clone()),
                    NodeKind::Empty => (EMPTY_NODE_RADIUS, state.config.empty_color.clone()),
                };
                self.commands.push(DrawCommand::Circle {
                    center: Vec2::new(node.x, y),
                    radius,
                    fill,
                });
            }
        }
    }

    fn character(&mut self, state: &GameState) {
        let character = &state.character;
        self.commands.extend([
            DrawCommand::Save,
            DrawCommand::Translate(character.pos),
            DrawCommand::Rotate(character.direction.tilt()),
            DrawCommand::Image {
                offset: -Vec2::new(SPRITE_CENTER.0, SPRITE_CENTER.1),
            },
            DrawCommand::Restore,
        ]);
    }

    /// Goal pattern along the top; already-hit entries shrink
    fn hud(&mut self, state: &GameState) {
        let goal = &state.goal;
        for (k, node_type) in goal.pattern.iter().enumerate() {
            let radius = if k < goal.next { HUD_DONE_RADIUS } else { HUD_RADIUS };
            self.commands.push(DrawCommand::Circle {
                center: Vec2::new(state.config.x_margin + HUD_STEP * k as f32, HUD_Y),
                radius,
                fill: node_type.color.clone(),
            });
        }
    }

    /// Replay the commands onto a surface
    pub fn draw(&self, surface: &mut impl Surface) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear { width, height } => surface.clear(*width, *height),
                DrawCommand::Line { from, to } => surface.line(*from, *to),
                DrawCommand::Circle {
                    center,
                    radius,
                    fill,
                } => surface.circle(*center, *radius, fill),
                DrawCommand::Image { offset } => surface.image(*offset),
                DrawCommand::Save => surface.save(),
                DrawCommand::Restore => surface.restore(),
                DrawCommand::Translate(by) => surface.translate(*by),
                DrawCommand::Rotate(radians) => surface.rotate(*radians),
            }
        }
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{Direction, TickInput, tick};

    fn state() -> GameState {
        GameState::new(GameConfig::default(), 21).unwrap()
    }

    #[derive(Default)]
    struct CountingSurface {
        clears: usize,
        lines: usize,
        circles: usize,
        images: usize,
        depth: i32,
        rotation: f32,
    }

    impl Surface for CountingSurface {
        fn clear(&mut self, _width: f32, _height: f32) {
            self.clears += 1;
        }
        fn line(&mut self, _from: Vec2, _to: Vec2) {
            self.lines += 1;
        }
        fn circle(&mut self, _center: Vec2, _radius: f32, _fill: &str) {
            self.circles += 1;
        }
        fn image(&mut self, _offset: Vec2) {
            self.images += 1;
        }
        fn save(&mut self) {
            self.depth += 1;
        }
        fn restore(&mut self) {
            self.depth -= 1;
        }
        fn translate(&mut self, _by: Vec2) {}
        fn rotate(&mut self, radians: f32) {
            self.rotation = radians;
        }
    }

    #[test]
    fn test_one_circle_per_live_node_plus_hud() {
        let state = state();
        let scene = Scene::build(&state);
        let live_nodes: usize = state.rows.iter().map(|r| r.nodes.len()).sum();
        assert_eq!(scene.circles().count(), live_nodes + state.goal.len());
    }

    #[test]
    fn test_consumed_nodes_are_not_drawn() {
        let mut state = state();
        let before = Scene::build(&state).circles().count();
        state.rows.active_row_mut().nodes[2].consume();
        let after = Scene::build(&state).circles().count();
        assert_eq!(after, before - 1);
    }

    #[test]
    fn test_grid_crosses_on_active_row_nodes() {
        let state = state();
        let scene = Scene::build(&state);
        let active_y = state.row_y(state.rows.active_index());
        // Every A row y must be a multiple of the spacing away from a line start
        let starts: Vec<f32> = scene
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, .. } => Some(from.y),
                _ => None,
            })
            .collect();
        assert!(starts.iter().any(|&y| (y - active_y).abs() < 1e-3));
    }

    #[test]
    fn test_replay_balances_transforms() {
        let mut state = state();
        tick(
            &mut state,
            &TickInput {
                direction: Some(Direction::Right),
            },
        );
        let scene = Scene::build(&state);
        let mut surface = CountingSurface::default();
        scene.draw(&mut surface);

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.images, 1);
        assert_eq!(surface.depth, 0);
        assert!(surface.lines > 0);
        assert_eq!(surface.circles, scene.circles().count());
        assert_eq!(surface.rotation, Direction::Right.tilt());
    }

    #[test]
    fn test_hud_shrinks_completed_entries() {
        let mut state = state();
        state.goal.next = 1;
        let scene = Scene::build(&state);
        let hud: Vec<f32> = scene
            .circles()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, radius, .. } if center.y == HUD_Y => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(hud.len(), state.goal.len());
        assert_eq!(hud[0], HUD_DONE_RADIUS);
        assert!(hud[1..].iter().all(|&r| r == HUD_RADIUS));
    }
}
