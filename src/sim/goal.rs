//! Goal pattern state machine
//!
//! The player has to land on goal nodes in the order of the current pattern.
//! Empty nodes are ignored, a wrong type restarts the pattern, and finishing
//! it pays out the pattern length and deals a new pattern.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{NodeKind, NodeType};
use crate::config::GameConfig;

/// Result of feeding one node hit to the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalOutcome {
    /// Empty node, nothing changes
    Ignored,
    Advanced { next: usize },
    /// Wrong type, cursor back to 0
    Reset,
    /// Pattern finished; a new one is already in place
    Completed { length: usize },
}

#[derive(Debug, Clone)]
pub struct Goal {
    pub pattern: Vec<NodeType>,
    /// Index of the next node type to hit
    pub next: usize,
}

impl Goal {
    /// Random pattern with a length in the configured range
    pub fn generate(config: &GameConfig, rng: &mut Pcg32) -> Self {
        let length = rng.random_range(config.goal_length_min..=config.goal_length_max);
        let pattern = (0..length)
            .map(|_| {
                let index = rng.random_range(0..config.goal_types.len());
                config.goal_types[index].clone()
            })
            .collect();
        Self { pattern, next: 0 }
    }

    pub fn new(pattern: Vec<NodeType>) -> Self {
        Self { pattern, next: 0 }
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Node type the player needs next
    pub fn target(&self) -> Option<&NodeType> {
        self.pattern.get(self.next)
    }

    pub fn on_node_hit(
        &mut self,
        kind: &NodeKind,
        config: &GameConfig,
        rng: &mut Pcg32,
    ) -> GoalOutcome {
        let NodeKind::Goal(hit) = kind else {
            return GoalOutcome::Ignored;
        };

        let matches = self.target().is_some_and(|target| target.tag == hit.tag);
        if !matches {
            self.next = 0;
            return GoalOutcome::Reset;
        }

        self.next += 1;
        if self.next < self.pattern.len() {
            return GoalOutcome::Advanced { next: self.next };
        }

        let length = self.pattern.len();
        *self = Self::generate(config, rng);
        GoalOutcome::Completed { length }
    }
}
