//! Error type for every rejected game operation.
//!
//! All failures are local validation errors on malformed or out-of-order
//! calls. None of them are fatal, and a failed operation never changes the
//! session, so the caller can re-render the same phase with the message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::PlayerId;
use crate::session::Phase;
use crate::topics::TopicField;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LiarError>;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiarError {
    /// Table size outside the configured bounds.
    #[error("Invalid player count {count}: must be between {min} and {max}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    /// The current seat has already confirmed its role.
    #[error("{0} has already confirmed their role")]
    AlreadyConfirmed(PlayerId),

    /// The seat hasn't confirmed yet (or doesn't exist), so its role stays hidden.
    #[error("Role for {0} has not been revealed")]
    RoleNotYetRevealed(PlayerId),

    /// The current seat must confirm before the device is passed on.
    #[error("Cannot advance past {current}: current player has not confirmed or is the last seat")]
    NotReadyToAdvance { current: PlayerId },

    /// The accused seat doesn't exist at this table.
    #[error("Invalid accusation of {accused}: table has {player_count} players")]
    InvalidAccusation { accused: PlayerId, player_count: usize },

    /// Operation not allowed in the current phase.
    #[error("Cannot {operation} during {phase:?} phase")]
    InvalidPhaseTransition { phase: Phase, operation: String },

    /// Timer fields out of range.
    #[error("Invalid timer {minutes}m {seconds}s: minutes must be at most {max_minutes}, seconds at most 59")]
    InvalidTimerDuration { minutes: u32, seconds: u32, max_minutes: u32 },

    /// A topic needs both a question and a range.
    #[error("Topic {0} must not be empty")]
    EmptyTopicField(TopicField),

    /// No topic at the selected catalog position.
    #[error("Topic #{index} not found: catalog has {len} topics")]
    TopicNotFound { index: usize, len: usize },
}

impl LiarError {
    pub(crate) fn wrong_phase(phase: Phase, operation: &str) -> Self {
        LiarError::InvalidPhaseTransition {
            phase,
            operation: operation.to_string(),
        }
    }
}
