//! Countdown state and `MM:SS` rendering.

use std::time::Instant;

use crate::core::GameRules;
use crate::error::{LiarError, Result};

/// A running discussion timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    total_seconds: u32,
    started_at: Instant,
}

impl Countdown {
    /// Start a countdown of `total_seconds` at `now`.
    #[must_use]
    pub fn start(total_seconds: u32, now: Instant) -> Self {
        Self {
            total_seconds,
            started_at: now,
        }
    }

    /// Start a countdown from the minutes and seconds fields of the setup
    /// screen, checking them against `rules`.
    pub fn from_fields(minutes: u32, seconds: u32, rules: &GameRules, now: Instant) -> Result<Self> {
        if !rules.allows_timer(minutes, seconds) {
            return Err(LiarError::InvalidTimerDuration {
                minutes,
                seconds,
                max_minutes: rules.max_timer_minutes,
            });
        }
        Ok(Self::start(minutes.saturating_mul(60).saturating_add(seconds), now))
    }

    /// Length of the countdown in seconds.
    #[must_use]
    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    /// When the countdown started.
    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Whole seconds left at `now`, never below zero.
    ///
    /// Partial seconds count as not yet elapsed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.started_at).as_secs();
        let elapsed = u32::try_from(elapsed).unwrap_or(u32::MAX);
        self.total_seconds.saturating_sub(elapsed)
    }

    /// True once no time is left.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now) == 0
    }
}

/// Render seconds as `MM:SS`.
///
/// ```
/// use liar_game::timer::format_remaining;
///
/// assert_eq!(format_remaining(75), "01:15");
/// assert_eq!(format_remaining(0), "00:00");
/// ```
#[must_use]
pub fn format_remaining(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_remaining_counts_down() {
        let t0 = Instant::now();
        let timer = Countdown::start(90, t0);

        assert_eq!(timer.remaining(t0), 90);
        assert_eq!(timer.remaining(t0 + Duration::from_secs(30)), 60);
        assert!(!timer.is_expired(t0 + Duration::from_secs(89)));
    }

    #[test]
    fn test_remaining_floors_at_zero() {
        let t0 = Instant::now();
        let timer = Countdown::start(10, t0);

        assert_eq!(timer.remaining(t0 + Duration::from_secs(15)), 0);
        assert!(timer.is_expired(t0 + Duration::from_secs(10)));
        assert!(timer.is_expired(t0 + Duration::from_secs(15)));
    }

    #[test]
    fn test_partial_seconds_not_counted() {
        let t0 = Instant::now();
        let timer = Countdown::start(10, t0);

        assert_eq!(timer.remaining(t0 + Duration::from_millis(999)), 10);
        assert_eq!(timer.remaining(t0 + Duration::from_millis(9_999)), 1);
    }

    #[test]
    fn test_earlier_instant_counts_as_no_time_elapsed() {
        let t0 = Instant::now() + Duration::from_secs(5);
        let timer = Countdown::start(10, t0);
        assert_eq!(timer.remaining(t0 - Duration::from_secs(5)), 10);
    }

    #[test]
    fn test_zero_length_is_expired_immediately() {
        let t0 = Instant::now();
        assert!(Countdown::start(0, t0).is_expired(t0));
    }

    #[test]
    fn test_from_fields() {
        let rules = GameRules::default();
        let t0 = Instant::now();

        let timer = Countdown::from_fields(1, 15, &rules, t0).unwrap();
        assert_eq!(timer.total_seconds(), 75);
        assert_eq!(timer.started_at(), t0);

        assert_eq!(
            Countdown::from_fields(31, 0, &rules, t0),
            Err(LiarError::InvalidTimerDuration { minutes: 31, seconds: 0, max_minutes: 30 })
        );
        assert!(Countdown::from_fields(0, 60, &rules, t0).is_err());
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(59), "00:59");
        assert_eq!(format_remaining(60), "01:00");
        assert_eq!(format_remaining(30 * 60 + 59), "30:59");
    }
}
