//! Game state and core simulation types
//!
//! All mutable game state lives in one [`GameState`] aggregate owned by the
//! tick loop.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::goal::Goal;
use super::path::PathTracker;
use super::rows::RowWindow;
use super::scroll::ScrollClock;
use crate::config::GameConfig;
use crate::consts::*;
use crate::error::Result;

/// Lateral arrangement of a row. Rows alternate A/B/A/B...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `grid_count + 1` nodes starting at the left margin
    A,
    /// `grid_count` nodes offset by half a spacing
    B,
}

impl Layout {
    pub fn flipped(self) -> Self {
        match self {
            Layout::A => Layout::B,
            Layout::B => Layout::A,
        }
    }

    /// Drift sign of group +1 waypoints while a row of this layout is active
    pub fn parity(self) -> f32 {
        match self {
            Layout::A => 1.0,
            Layout::B => -1.0,
        }
    }
}

/// A goal node type (template copied into every generated node)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeType {
    /// Type tag used for goal matching ("blue", "red", ...)
    pub tag: String,
    /// Presentation color
    pub color: String,
    pub score: u32,
}

impl NodeType {
    pub fn new(tag: &str, color: &str, score: u32) -> Self {
        Self {
            tag: tag.to_string(),
            color: color.to_string(),
            score,
        }
    }
}

/// Node category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Goal(NodeType),
    Empty,
}

/// A point in the scrolling field
#[derive(Debug, Clone)]
pub struct Node {
    /// Lateral position (parked at `CONSUMED_X` once hit)
    pub x: f32,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(x: f32, kind: NodeKind) -> Self {
        Self { x, kind }
    }

    pub fn tag(&self) -> &str {
        match &self.kind {
            NodeKind::Goal(node_type) => &node_type.tag,
            NodeKind::Empty => "empty",
        }
    }

    pub fn score(&self) -> u32 {
        match &self.kind {
            NodeKind::Goal(node_type) => node_type.score,
            NodeKind::Empty => 0,
        }
    }

    pub fn is_goal(&self) -> bool {
        matches!(self.kind, NodeKind::Goal(_))
    }

    /// Move the node out of the field. The slot stays so row indices don't shift.
    pub fn consume(&mut self) {
        self.x = CONSUMED_X;
    }

    pub fn is_consumed(&self) -> bool {
        self.x == CONSUMED_X
    }
}

/// A row of nodes sharing one layout
#[derive(Debug, Clone)]
pub struct Row {
    pub layout: Layout,
    pub nodes: Vec<Node>,
}

/// Lateral movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
            Direction::None => 0.0,
        }
    }

    /// Sprite rotation for this heading (leans into the turn)
    pub fn tilt(self) -> f32 {
        match self {
            Direction::Left => TILT,
            Direction::Right => -TILT,
            Direction::None => 0.0,
        }
    }
}

/// The player character
#[derive(Debug, Clone)]
pub struct Character {
    pub pos: Vec2,
    /// Heading currently being integrated
    pub direction: Direction,
    /// Last heading the player asked for (applied on the next node hit)
    pub requested: Direction,
    /// Index of the path waypoint being tracked
    pub waypoint: usize,
}

impl Character {
    pub fn new(x: f32, y: f32, waypoint: usize) -> Self {
        Self {
            pos: Vec2::new(x, y),
            direction: Direction::None,
            requested: Direction::None,
            waypoint,
        }
    }
}

/// Things that happened during the last tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The row window advanced by one row
    RowsRolled,
    NodeHit { x: f32, tag: String },
    GoalAdvanced { next: usize },
    GoalReset,
    GoalCompleted { length: usize, score: u64 },
    /// A margin node overrode the player's heading
    DirectionForced { direction: Direction },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paused: bool,
    pub score: u64,
    pub scroll: ScrollClock,
    pub rows: RowWindow,
    pub path: PathTracker,
    pub goal: Goal,
    pub character: Character,
    /// Events from the most recent running tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game; fails if the config is invalid
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let rows = RowWindow::new(&config, &mut rng);
        let goal = Goal::generate(&config, &mut rng);

        let start_x = config.canvas_size() / 2.0;
        let path = PathTracker::new(start_x, &config);
        let waypoint = path.start_index(start_x);
        let character = Character::new(start_x, config.character_y(), waypoint);

        log::info!(
            "New game: seed={}, rows={}, goal length={}",
            seed,
            rows.len(),
            goal.len()
        );

        Ok(Self {
            config,
            seed,
            rng,
            time_ticks: 0,
            paused: false,
            score: 0,
            scroll: ScrollClock::default(),
            rows,
            path,
            goal,
            character,
            events: Vec::new(),
        })
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn rows(&self) -> &RowWindow {
        &self.rows
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn scroll(&self) -> &ScrollClock {
        &self.scroll
    }

    pub fn path(&self) -> &PathTracker {
        &self.path
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flip the pause flag, returning the new value
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::info!("Paused: {}", self.paused);
        self.paused
    }

    /// Screen y of a row in the window at the current scroll phase
    pub fn row_y(&self, index: usize) -> f32 {
        self.rows
            .row_y(index, self.scroll.phase(&self.config), &self.config)
    }
}
