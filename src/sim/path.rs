//! Zig-zag path tracking
//!
//! Every layout-A node column gets a waypoint drifting inward from it: the
//! left margin column only a right-mover, the right margin column only a
//! left-mover, and each inner column one of each. That is `2 * grid_count`
//! waypoints, alternating group +1/-1. While an A row is active group +1
//! drifts right and group -1 drifts left; both reverse while a B row is
//! active. Every waypoint therefore bounces between neighbouring A and B node
//! positions in step with the scroll, so whichever node the character lands
//! on has a waypoint leaving it in either inward direction.

use super::state::Direction;
use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub x: f32,
    /// Drift group, -1 or +1
    pub group: i8,
}

impl Waypoint {
    /// Lateral drift sign for the given active-row parity
    #[inline]
    pub fn drift(&self, parity: f32) -> f32 {
        f32::from(self.group) * parity
    }
}

#[derive(Debug, Clone)]
pub struct PathTracker {
    waypoints: Vec<Waypoint>,
}

impl PathTracker {
    /// Build `2 * grid_count` waypoints centered on `start_x`
    pub fn new(start_x: f32, config: &GameConfig) -> Self {
        let center = (config.grid_count / 2) as f32;
        let waypoints = (0..2 * config.grid_count)
            .map(|i| {
                let column = ((i + 1) / 2) as f32;
                Waypoint {
                    x: start_x + (column - center) * config.line_spacing,
                    group: if i % 2 == 0 { 1 } else { -1 },
                }
            })
            .collect();
        Self { waypoints }
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoint_x(&self, index: usize) -> Option<f32> {
        self.waypoints.get(index).map(|w| w.x)
    }

    /// True when waypoint `index` is within `slack` of `x`
    pub fn tracks(&self, index: usize, x: f32, slack: f32) -> bool {
        self.waypoint_x(index).is_some_and(|wx| (wx - x).abs() <= slack)
    }

    /// Index of the waypoint sitting exactly on `x`, else the nearest one
    pub fn start_index(&self, x: f32) -> usize {
        if let Some(index) = self.waypoints.iter().position(|w| w.x == x) {
            return index;
        }
        log::debug!("No waypoint at x={}, using nearest", x);
        self.nearest(x, |_| true)
    }

    /// Shift every waypoint by one tick of drift
    pub fn step(&mut self, gravity: f32, parity: f32) {
        for waypoint in &mut self.waypoints {
            waypoint.x += gravity * waypoint.drift(parity);
        }
    }

    /// Move `index` one step in `direction`, clamped to the waypoint range
    pub fn advance(&self, index: usize, direction: Direction) -> usize {
        let last = self.waypoints.len().saturating_sub(1);
        match direction {
            Direction::Right => (index + 1).min(last),
            Direction::Left => index.saturating_sub(1).min(last),
            Direction::None => index.min(last),
        }
    }

    /// Nearest waypoint currently drifting toward `direction` (ties go to the lower index)
    pub fn anchor(&self, x: f32, direction: Direction, parity: f32) -> usize {
        let sign = direction.sign();
        if sign == 0.0 {
            return self.nearest(x, |_| true);
        }
        self.nearest(x, |w| w.drift(parity) == sign)
    }

    fn nearest(&self, x: f32, filter: impl Fn(&Waypoint) -> bool) -> usize {
        self.waypoints
            .iter()
            .enumerate()
            .filter(|(_, w)| filter(*w))
            .min_by(|(_, a), (_, b)| {
                (a.x - x)
                    .abs()
                    .partial_cmp(&(b.x - x).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}
