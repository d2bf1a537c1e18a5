//! Rendering seam
//!
//! The simulation never draws. Each frame a [`Scene`] display list is built
//! from a read-only view of the game state and replayed onto whatever
//! [`Surface`] the host provides (a browser canvas, or nothing at all).

pub mod scene;

pub use scene::{DrawCommand, Scene};

use glam::Vec2;

/// 2D drawing primitives the game needs from its host
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn line(&mut self, from: Vec2, to: Vec2);
    /// Filled circle with a stroked outline
    fn circle(&mut self, center: Vec2, radius: f32, fill: &str);
    /// Character sprite with its top-left corner at `offset`
    fn image(&mut self, offset: Vec2);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, by: Vec2);
    fn rotate(&mut self, radians: f32);
}

/// Where the score is shown
pub trait ScoreSink {
    fn display(&mut self, score: u64);
}

/// Score sink that writes to the log (native builds, tests)
#[derive(Debug, Default)]
pub struct LogScoreSink {
    pub last: Option<u64>,
}

impl ScoreSink for LogScoreSink {
    fn display(&mut self, score: u64) {
        log::info!("Score: {}", score);
        self.last = Some(score);
    }
}

/// Surface that discards everything (headless runs)
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _width: f32, _height: f32) {}
    fn line(&mut self, _from: Vec2, _to: Vec2) {}
    fn circle(&mut self, _center: Vec2, _radius: f32, _fill: &str) {}
    fn image(&mut self, _offset: Vec2) {}
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn translate(&mut self, _by: Vec2) {}
    fn rotate(&mut self, _radians: f32) {}
}
