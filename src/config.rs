//! Game sizing and balance
//!
//! Every tunable lives in [`GameConfig`]. Defaults reproduce the reference
//! 660px field; a JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::state::{Layout, NodeType};

/// Lateral placement of one row layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowGeometry {
    /// X of the first node
    pub start: f32,
    /// Number of nodes in the row
    pub count: usize,
}

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub line_spacing: f32,
    pub grid_count: usize,
    pub x_margin: f32,
    /// Scroll speed and lateral speed per tick
    pub gravity: f32,

    // === Rows ===
    pub row_capacity: usize,
    /// Row the character lands on
    pub active_row_index: usize,
    pub hit_tolerance: f32,

    // === Goals ===
    /// Chance (0-1) that a generated node is a goal node
    pub goal_node_percent: f32,
    pub goal_length_min: usize,
    pub goal_length_max: usize,
    pub goal_types: Vec<NodeType>,
    /// Color used for empty nodes
    pub empty_color: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            line_spacing: LINE_SPACING,
            grid_count: GRID_COUNT,
            x_margin: X_MARGIN,
            gravity: GRAVITY,

            row_capacity: ROW_CAPACITY,
            active_row_index: ACTIVE_ROW_INDEX,
            hit_tolerance: HIT_TOLERANCE,

            goal_node_percent: GOAL_NODE_PERCENT,
            goal_length_min: GOAL_LENGTH_MIN,
            goal_length_max: GOAL_LENGTH_MAX,
            goal_types: vec![
                NodeType::new("blue", "#3b82f6", 1),
                NodeType::new("red", "#ef4444", 2),
            ],
            empty_color: "#d0d0d0".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.line_spacing <= 0.0 {
            return Err(Error::NonPositive {
                field: "line_spacing",
                value: self.line_spacing,
            });
        }
        if self.gravity <= 0.0 {
            return Err(Error::NonPositive {
                field: "gravity",
                value: self.gravity,
            });
        }
        if self.x_margin < 0.0 {
            return Err(Error::Negative {
                field: "x_margin",
                value: self.x_margin,
            });
        }
        if self.grid_count == 0 {
            return Err(Error::EmptyGrid);
        }

        let half = self.half_spacing();
        // More than half a spacing per tick would skip row rolls
        if self.gravity > half {
            return Err(Error::GravityTooLarge {
                gravity: self.gravity,
                half,
            });
        }
        if !(0.0..half).contains(&self.hit_tolerance) {
            return Err(Error::InvalidTolerance {
                tolerance: self.hit_tolerance,
                half,
            });
        }

        if self.row_capacity < 2 {
            return Err(Error::RowCapacityTooSmall(self.row_capacity));
        }
        if self.active_row_index >= self.row_capacity {
            return Err(Error::ActiveRowOutOfBounds {
                index: self.active_row_index,
                capacity: self.row_capacity,
            });
        }

        if self.goal_length_min == 0 || self.goal_length_min > self.goal_length_max {
            return Err(Error::InvalidGoalLength {
                min: self.goal_length_min,
                max: self.goal_length_max,
            });
        }
        if !(0.0..=1.0).contains(&self.goal_node_percent) {
            return Err(Error::InvalidGoalPercent(self.goal_node_percent));
        }
        if self.goal_types.is_empty() {
            return Err(Error::NoGoalTypes);
        }

        Ok(())
    }

    #[inline]
    pub fn half_spacing(&self) -> f32 {
        self.line_spacing / 2.0
    }

    /// Edge length of the square play field
    #[inline]
    pub fn canvas_size(&self) -> f32 {
        crate::canvas_size(self.line_spacing, self.grid_count, self.x_margin)
    }

    /// Lateral bounds the character stays within
    #[inline]
    pub fn lateral_bounds(&self) -> (f32, f32) {
        (self.x_margin, self.canvas_size() - self.x_margin)
    }

    pub fn row_geometry(&self, layout: Layout) -> RowGeometry {
        match layout {
            Layout::A => RowGeometry {
                start: self.x_margin,
                count: self.grid_count + 1,
            },
            Layout::B => RowGeometry {
                start: self.x_margin + self.half_spacing(),
                count: self.grid_count,
            },
        }
    }

    /// Identify a row layout from its node count
    pub fn layout_for_count(&self, count: usize) -> Option<Layout> {
        [Layout::A, Layout::B]
            .into_iter()
            .find(|&layout| self.row_geometry(layout).count == count)
    }

    /// Layout of the first generated row, chosen so the active row starts as A
    pub fn first_layout(&self) -> Layout {
        if self.active_row_index % 2 == 0 {
            Layout::A
        } else {
            Layout::B
        }
    }

    /// Resting y of the character: the line the active row sits on when it activates
    pub fn character_y(&self) -> f32 {
        self.active_row_index as f32 * self.half_spacing()
    }

    /// Gap beyond which the character is pulled back toward its waypoint
    #[inline]
    pub fn correction_threshold(&self) -> f32 {
        self.hit_tolerance * CORRECTION_RANGE
    }
}
