use serde::{Deserialize, Serialize};

/// One stage of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game yet: choosing the table size and topic.
    #[default]
    Setup,
    /// Passing the device around so each seat sees its role.
    RoleCheck,
    /// Choosing how long the discussion runs.
    TimerSetup,
    /// Discussion in progress.
    Countdown,
    /// Waiting for the table's accusation.
    Vote,
    /// Outcome decided. Only a reset leaves this phase.
    Resolved,
}

impl Phase {
    /// Check if this phase ends the game.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::Resolved
    }
}
