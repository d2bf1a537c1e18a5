//! Frame loop driver
//!
//! The host calls [`Session::frame`] from its frame callback and
//! [`Session::handle`] from its input handlers. A paused frame does nothing
//! and asks for no further frames; un-pausing tells the host to re-enter the
//! loop (unless a frame is already pending).

use crate::config::GameConfig;
use crate::error::Result;
use crate::input::Command;
use crate::render::{Scene, ScoreSink, Surface};
use crate::sim::{GameState, TickInput, tick};

/// What the host should do after a call into the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Request another frame
    Schedule,
    /// Don't schedule anything
    Idle,
}

pub struct Session {
    state: GameState,
    /// Input collected since the last frame
    pending: TickInput,
    /// Score last pushed to the sink
    shown_score: Option<u64>,
    /// A frame callback is queued with the host
    frame_pending: bool,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Ok(Self::from_state(GameState::new(config, seed)?))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            pending: TickInput::default(),
            shown_score: None,
            frame_pending: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Start the loop: returns `Schedule` once, for the first frame
    pub fn start(&mut self) -> LoopControl {
        self.request_frame()
    }

    pub fn handle(&mut self, command: Command) -> LoopControl {
        if let Some(direction) = command.direction() {
            self.pending.direction = Some(direction);
            return LoopControl::Idle;
        }

        // Pause toggle
        if self.state.toggle_pause() {
            LoopControl::Idle
        } else {
            self.request_frame()
        }
    }

    fn request_frame(&mut self) -> LoopControl {
        if self.frame_pending {
            return LoopControl::Idle;
        }
        self.frame_pending = true;
        LoopControl::Schedule
    }

    /// Run one frame: tick, draw, report score
    pub fn frame(&mut self, surface: &mut impl Surface, sink: &mut impl ScoreSink) -> LoopControl {
        self.frame_pending = false;
        if self.state.is_paused() {
            return LoopControl::Idle;
        }

        let input = std::mem::take(&mut self.pending);
        tick(&mut self.state, &input);

        Scene::build(&self.state).draw(surface);

        let score = self.state.score();
        if self.shown_score != Some(score) {
            sink.display(score);
            self.shown_score = Some(score);
        }

        self.request_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{LogScoreSink, NullSurface};
    use crate::sim::Direction;

    fn session() -> Session {
        Session::new(GameConfig::default(), 31).unwrap()
    }

    #[test]
    fn test_running_frames_reschedule() {
        let mut s = session();
        assert_eq!(s.start(), LoopControl::Schedule);
        assert_eq!(s.start(), LoopControl::Idle);

        let mut sink = LogScoreSink::default();
        for _ in 0..10 {
            assert_eq!(s.frame(&mut NullSurface, &mut sink), LoopControl::Schedule);
        }
        assert_eq!(s.state().time_ticks, 10);
        assert_eq!(sink.last, Some(0));
    }

    #[test]
    fn test_pause_halts_and_resume_reenters() {
        let mut s = session();
        let mut sink = LogScoreSink::default();
        s.start();
        s.frame(&mut NullSurface, &mut sink);

        // Pausing with a frame queued: that frame becomes a no-op
        assert_eq!(s.handle(Command::TogglePause), LoopControl::Idle);
        assert_eq!(s.frame(&mut NullSurface, &mut sink), LoopControl::Idle);
        assert_eq!(s.state().time_ticks, 1);

        // Resuming must re-enter the loop
        assert_eq!(s.handle(Command::TogglePause), LoopControl::Schedule);
        assert_eq!(s.frame(&mut NullSurface, &mut sink), LoopControl::Schedule);
        assert_eq!(s.state().time_ticks, 2);
    }

    #[test]
    fn test_quick_pause_resume_does_not_double_schedule() {
        let mut s = session();
        s.start();
        assert_eq!(s.handle(Command::TogglePause), LoopControl::Idle);
        // The first frame is still queued
        assert_eq!(s.handle(Command::TogglePause), LoopControl::Idle);

        let mut sink = LogScoreSink::default();
        assert_eq!(s.frame(&mut NullSurface, &mut sink), LoopControl::Schedule);
    }

    #[test]
    fn test_direction_applies_on_next_frame() {
        let mut s = session();
        let mut sink = LogScoreSink::default();
        assert_eq!(s.handle(Command::MoveLeft), LoopControl::Idle);
        s.frame(&mut NullSurface, &mut sink);
        assert_eq!(s.state().character().requested, Direction::Left);
        assert_eq!(s.state().character().direction, Direction::Left);
    }
}
