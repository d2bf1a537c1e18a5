//! Scroll clock
//!
//! Tracks how far the field has scrolled within one line spacing and
//! reports when a new row is due.

use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollClock {
    /// Current offset in `[0, line_spacing)`
    pub offset: f32,
    /// Offset before the last tick
    pub prev_offset: f32,
}

impl ScrollClock {
    /// Advance by `gravity`, wrapping at the line spacing
    pub fn tick(&mut self, config: &GameConfig) {
        self.prev_offset = self.offset;
        self.offset = (self.offset + config.gravity) % config.line_spacing;
    }

    /// True once per half spacing of scroll: on wrap, or on crossing the midpoint.
    pub fn crossed_half_cycle(&self, config: &GameConfig) -> bool {
        let half = config.half_spacing();
        self.offset < self.prev_offset || (self.prev_offset < half && self.offset >= half)
    }

    /// Offset within the current half cycle, in `[0, half)`
    pub fn phase(&self, config: &GameConfig) -> f32 {
        let half = config.half_spacing();
        if self.offset >= half {
            self.offset - half
        } else {
            self.offset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config_with_gravity(gravity: f32) -> GameConfig {
        GameConfig {
            gravity,
            ..Default::default()
        }
    }

    fn count_crossings(config: &GameConfig, ticks: usize) -> usize {
        let mut clock = ScrollClock::default();
        let mut crossings = 0;
        for _ in 0..ticks {
            clock.tick(config);
            assert!(clock.offset >= 0.0 && clock.offset < config.line_spacing);
            if clock.crossed_half_cycle(config) {
                crossings += 1;
            }
        }
        crossings
    }

    #[test]
    fn test_even_increment_crosses_once_per_half() {
        // 0.5 divides 50 exactly: a crossing every 100 ticks
        let config = config_with_gravity(0.5);
        assert_eq!(count_crossings(&config, 99), 0);
        assert_eq!(count_crossings(&config, 100), 1);
        assert_eq!(count_crossings(&config, 1000), 10);
    }

    #[test]
    fn test_uneven_increment_crosses_once_per_half() {
        // 3 does not divide 50: 999 ticks = 2997 px = 59 full halves
        let config = config_with_gravity(3.0);
        assert_eq!(count_crossings(&config, 999), 59);
        assert_eq!(count_crossings(&config, 17), 1);
    }

    #[test]
    fn test_reference_gravity() {
        // 9999 * 0.49 = 4899.51 px
        let config = GameConfig::default();
        assert_eq!(count_crossings(&config, 9999), 97);
    }

    #[test]
    fn test_wrap_and_midpoint_both_fire() {
        let config = config_with_gravity(10.0);
        let mut clock = ScrollClock {
            offset: 45.0,
            prev_offset: 35.0,
        };
        clock.tick(&config);
        assert_eq!(clock.offset, 55.0);
        assert!(clock.crossed_half_cycle(&config));
        assert_eq!(clock.phase(&config), 5.0);

        clock.offset = 95.0;
        clock.tick(&config);
        assert_eq!(clock.offset, 5.0);
        assert!(clock.crossed_half_cycle(&config));

        clock.tick(&config);
        assert!(!clock.crossed_half_cycle(&config));
    }

    proptest! {
        #[test]
        fn prop_crossings_track_accumulated_scroll(gravity in 0.05f32..50.0, ticks in 1usize..3000) {
            let config = config_with_gravity(gravity);
            let crossings = count_crossings(&config, ticks) as i64;
            let expected = (ticks as f64 * gravity as f64 / config.half_spacing() as f64).floor() as i64;
            // Float accumulation may move a crossing that lands exactly on the last tick
            prop_assert!((crossings - expected).abs() <= 1, "{} vs {}", crossings, expected);
        }
    }
}
