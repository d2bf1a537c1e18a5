use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Active row index {index} is outside the row window (capacity {capacity})")]
    ActiveRowOutOfBounds { index: usize, capacity: usize },

    #[error("Row window needs at least 2 rows, got {0}")]
    RowCapacityTooSmall(usize),

    #[error("Grid must have at least one column")]
    EmptyGrid,

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("Gravity {gravity} exceeds half the line spacing ({half})")]
    GravityTooLarge { gravity: f32, half: f32 },

    #[error("Hit tolerance {tolerance} must be within [0, {half})")]
    InvalidTolerance { tolerance: f32, half: f32 },

    #[error("Goal pattern length range {min}..={max} is invalid")]
    InvalidGoalLength { min: usize, max: usize },

    #[error("Goal node percent must be within [0, 1], got {0}")]
    InvalidGoalPercent(f32),

    #[error("At least one goal node type is required")]
    NoGoalTypes,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Errors that come from the config values themselves rather than reading them
    pub fn is_invalid_config(&self) -> bool {
        !matches!(self, Error::Io(_) | Error::Json(_))
    }
}
