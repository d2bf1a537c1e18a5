//! Keyboard mapping
//!
//! Raw key codes from the host are turned into the three commands the game
//! understands. Both keydown codes (arrows, upper-case letters) and keypress
//! codes (lower-case letters) are accepted.

use crate::sim::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    TogglePause,
}

impl Command {
    /// Map a key code; unknown codes are logged and ignored
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            // Left arrow, 'A', 'a'
            37 | 65 | 97 => Some(Command::MoveLeft),
            // Right arrow, 'D', 'd'
            39 | 68 | 100 => Some(Command::MoveRight),
            // Space
            32 => Some(Command::TogglePause),
            _ => {
                log::warn!("Unknown key pressed: {}", code);
                None
            }
        }
    }

    /// Heading requested by a movement command
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            Command::TogglePause => None,
        }
    }
}
