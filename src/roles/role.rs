use serde::{Deserialize, Serialize};

/// A hidden role dealt to one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Sees only the range hint, never the question.
    Liar,
    /// Sees the full topic but plays to protect the Liar.
    Troll,
    /// Sees the full topic and hunts the Liar.
    Citizen,
}

impl Role {
    /// Whether this role is shown the secret question.
    #[must_use]
    pub fn knows_question(self) -> bool {
        !matches!(self, Role::Liar)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Liar => write!(f, "Liar"),
            Role::Troll => write!(f, "Troll"),
            Role::Citizen => write!(f, "Citizen"),
        }
    }
}
