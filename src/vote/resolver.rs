//! Vote resolution: the accused seat's role decides who wins.
//!
//! | accused | outcome |
//! |---|---|
//! | Liar | `CitizensWin` |
//! | Troll | `TrollWins` |
//! | Citizen | `LiarWins` |

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::error::{LiarError, Result};
use crate::roles::{Role, RoleAssignment};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The table caught the Liar.
    CitizensWin,
    /// The Troll drew the accusation.
    TrollWins,
    /// An innocent Citizen was accused.
    LiarWins,
}

impl Outcome {
    /// The outcome of accusing a seat holding `role`.
    #[must_use]
    pub fn for_accused(role: Role) -> Self {
        match role {
            Role::Liar => Outcome::CitizensWin,
            Role::Troll => Outcome::TrollWins,
            Role::Citizen => Outcome::LiarWins,
        }
    }

    /// Check if a player holding `role` won.
    #[must_use]
    pub fn is_winner(self, role: Role) -> bool {
        matches!(
            (self, role),
            (Outcome::CitizensWin, Role::Citizen)
                | (Outcome::TrollWins, Role::Troll)
                | (Outcome::LiarWins, Role::Liar)
        )
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::CitizensWin => write!(f, "Citizens win: the Liar was caught"),
            Outcome::TrollWins => write!(f, "Troll wins: the table accused the Troll"),
            Outcome::LiarWins => write!(f, "Liar wins: the table accused a Citizen"),
        }
    }
}

/// Resolve an accusation against the dealt roles.
pub fn resolve(accused: PlayerId, roles: &RoleAssignment) -> Result<Outcome> {
    roles
        .get(accused)
        .map(Outcome::for_accused)
        .ok_or(LiarError::InvalidAccusation {
            accused,
            player_count: roles.player_count(),
        })
}
