//! Game configuration.
//!
//! `GameRules` holds the table-size policy and timer bounds. The defaults are
//! the standard rules: 3-10 players, a Troll from 4 players up, and at most
//! 30 minutes of discussion.

use serde::{Deserialize, Serialize};

/// Table-size policy and timer bounds for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Smallest table allowed.
    pub min_players: usize,

    /// Largest table allowed.
    pub max_players: usize,

    /// Tables of at least this many players get a Troll.
    pub troll_threshold: usize,

    /// Upper bound for the minutes field of the discussion timer.
    pub max_timer_minutes: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            min_players: 3,
            max_players: 10,
            troll_threshold: 4,
            max_timer_minutes: 30,
        }
    }
}

impl GameRules {
    /// Upper bound for the seconds field of the discussion timer.
    pub const MAX_TIMER_SECONDS: u32 = 59;

    /// Rules for large groups (up to 20 players).
    #[must_use]
    pub fn extended() -> Self {
        Self::default().with_max_players(20)
    }

    /// Set the largest table allowed.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max;
        self
    }

    /// Set the smallest table allowed.
    #[must_use]
    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min;
        self
    }

    /// Set the table size from which a Troll is dealt.
    #[must_use]
    pub fn with_troll_threshold(mut self, threshold: usize) -> Self {
        self.troll_threshold = threshold;
        self
    }

    /// Set the upper bound for timer minutes.
    #[must_use]
    pub fn with_max_timer_minutes(mut self, minutes: u32) -> Self {
        self.max_timer_minutes = minutes;
        self
    }

    /// Check whether a table of `player_count` players is allowed.
    #[must_use]
    pub fn allows_players(&self, player_count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&player_count)
    }

    /// Check whether a table of `player_count` players gets a Troll.
    #[must_use]
    pub fn has_troll(&self, player_count: usize) -> bool {
        player_count >= self.troll_threshold
    }

    /// Check whether a timer of `minutes:seconds` is allowed.
    #[must_use]
    pub fn allows_timer(&self, minutes: u32, seconds: u32) -> bool {
        minutes <= self.max_timer_minutes && seconds <= Self::MAX_TIMER_SECONDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = GameRules::default();
        assert!(!rules.allows_players(2));
        assert!(rules.allows_players(3));
        assert!(rules.allows_players(10));
        assert!(!rules.allows_players(11));
    }

    #[test]
    fn test_troll_threshold() {
        let rules = GameRules::default();
        assert!(!rules.has_troll(3));
        assert!(rules.has_troll(4));
        assert!(rules.has_troll(10));
    }

    #[test]
    fn test_extended_rules() {
        let rules = GameRules::extended();
        assert!(rules.allows_players(20));
        assert!(!rules.allows_players(21));
        assert_eq!(rules.troll_threshold, 4);
    }

    #[test]
    fn test_timer_bounds() {
        let rules = GameRules::default();
        assert!(rules.allows_timer(0, 0));
        assert!(rules.allows_timer(30, 59));
        assert!(!rules.allows_timer(31, 0));
        assert!(!rules.allows_timer(0, 60));

        let short = rules.with_max_timer_minutes(10);
        assert!(!short.allows_timer(11, 0));
    }

    #[test]
    fn test_rules_serde() {
        let rules = GameRules::extended().with_troll_threshold(5);
        let json = serde_json::to_string(&rules).unwrap();
        let deserialized: GameRules = serde_json::from_str(&json).unwrap();
        assert_eq!(rules, deserialized);
    }
}
