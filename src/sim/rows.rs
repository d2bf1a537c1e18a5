//! Row generation and the sliding row window
//!
//! Rows are generated one at a time with an explicit layout; the window
//! owns which layout comes next so nothing else has to track the A/B toggle.

use std::collections::VecDeque;

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Layout, Node, NodeKind, Row};
use crate::config::GameConfig;

/// Generate one row of nodes for the given layout
///
/// Each slot is a goal node with probability `goal_node_percent`, typed
/// uniformly among the configured goal types. Nodes get their own copy of
/// the type template.
pub fn generate_row(layout: Layout, config: &GameConfig, rng: &mut Pcg32) -> Row {
    let geom = config.row_geometry(layout);
    let nodes = (0..geom.count)
        .map(|i| {
            let kind = random_node_kind(config, rng);
            Node::new(geom.start + i as f32 * config.line_spacing, kind)
        })
        .collect();

    Row { layout, nodes }
}

fn random_node_kind(config: &GameConfig, rng: &mut Pcg32) -> NodeKind {
    let percent = f64::from(config.goal_node_percent).clamp(0.0, 1.0);
    if rng.random_bool(percent) {
        let index = rng.random_range(0..config.goal_types.len());
        NodeKind::Goal(config.goal_types[index].clone())
    } else {
        NodeKind::Empty
    }
}

/// Fixed-length queue of on-screen rows. Index 0 is the top of the screen.
#[derive(Debug, Clone)]
pub struct RowWindow {
    rows: VecDeque<Row>,
    /// Layout of the next generated row
    next_layout: Layout,
    active_index: usize,
}

impl RowWindow {
    /// Pre-fill `row_capacity` rows, alternating from `config.first_layout()`
    pub fn new(config: &GameConfig, rng: &mut Pcg32) -> Self {
        let mut window = Self {
            rows: VecDeque::with_capacity(config.row_capacity),
            next_layout: config.first_layout(),
            active_index: config.active_row_index,
        };
        for _ in 0..config.row_capacity {
            window.push_generated(config, rng);
        }
        window
    }

    fn push_generated(&mut self, config: &GameConfig, rng: &mut Pcg32) {
        let row = generate_row(self.next_layout, config, rng);
        self.rows.push_back(row);
        self.next_layout = self.next_layout.flipped();
    }

    /// Drop the top row and append a fresh one at the bottom
    pub fn advance(&mut self, config: &GameConfig, rng: &mut Pcg32) {
        self.rows.pop_front();
        self.push_generated(config, rng);
        log::debug!(
            "Rows rolled, active layout now {:?}",
            self.active_row().layout
        );
    }

    /// The only row eligible for collision testing
    pub fn active_row(&self) -> &Row {
        &self.rows[self.active_index]
    }

    pub fn active_row_mut(&mut self) -> &mut Row {
        &mut self.rows[self.active_index]
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn next_layout(&self) -> Layout {
        self.next_layout
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Screen y of row `index` for a scroll `phase` in `[0, half)`
    pub fn row_y(&self, index: usize, phase: f32, config: &GameConfig) -> f32 {
        index as f32 * config.half_spacing() - phase
    }
}
