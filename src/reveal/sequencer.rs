//! Reveal sequencer: confirm-then-reveal, one seat at a time.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PlayerId, PlayerMap};
use crate::error::{LiarError, Result};
use crate::roles::{Role, RoleAssignment};
use crate::topics::Topic;

/// What a seat is shown after confirming.
///
/// A Liar gets the range only; everyone else gets the question too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclosure {
    pub player: PlayerId,
    pub role: Role,
    /// `None` for the Liar.
    pub question: Option<String>,
    pub range: String,
}

impl Disclosure {
    fn for_role(player: PlayerId, role: Role, topic: &Topic) -> Self {
        Self {
            player,
            role,
            question: role.knows_question().then(|| topic.question().to_string()),
            range: topic.range().to_string(),
        }
    }
}

/// Tracks which seats have confirmed and whose turn it is.
///
/// Confirmation flags only ever go from `false` to `true`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealSequencer {
    confirmed: PlayerMap<bool>,
    current: PlayerId,
}

impl RevealSequencer {
    /// Start at seat 1 with nobody confirmed.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            confirmed: PlayerMap::with_value(player_count, false),
            current: PlayerId::FIRST,
        }
    }

    /// Number of seats in the sequence.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.confirmed.player_count()
    }

    /// The seat currently holding the device.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Whether `player` has confirmed. Unknown seats never have.
    #[must_use]
    pub fn is_confirmed(&self, player: PlayerId) -> bool {
        self.confirmed.get(player).copied().unwrap_or(false)
    }

    /// Seats that have confirmed so far.
    #[must_use]
    pub fn confirmed_count(&self) -> usize {
        self.confirmed.values().filter(|&&c| c).count()
    }

    /// Mark the current seat as confirmed.
    pub fn confirm_current(&mut self) -> Result<PlayerId> {
        let current = self.current;
        let flag = self
            .confirmed
            .get_mut(current)
            .ok_or(LiarError::NotReadyToAdvance { current })?;
        if *flag {
            return Err(LiarError::AlreadyConfirmed(current));
        }
        *flag = true;

        debug!(player = current.number(), "player confirmed role");
        Ok(current)
    }

    /// The role of a confirmed seat.
    pub fn role_for(&self, player: PlayerId, roles: &RoleAssignment) -> Result<Role> {
        if !self.is_confirmed(player) {
            return Err(LiarError::RoleNotYetRevealed(player));
        }
        roles.get(player).ok_or(LiarError::RoleNotYetRevealed(player))
    }

    /// What a confirmed seat may see of the topic.
    pub fn disclosure(&self, player: PlayerId, roles: &RoleAssignment, topic: &Topic) -> Result<Disclosure> {
        let role = self.role_for(player, roles)?;
        Ok(Disclosure::for_role(player, role, topic))
    }

    /// Pass the device to the next seat.
    ///
    /// The current seat must have confirmed and must not be the last seat.
    pub fn advance(&mut self) -> Result<PlayerId> {
        let current = self.current;
        if !self.is_confirmed(current) || current.number() >= self.player_count() {
            return Err(LiarError::NotReadyToAdvance { current });
        }

        self.current = current.next();
        debug!(player = self.current.number(), "device passed");
        Ok(self.current)
    }

    /// True once the last seat has confirmed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current.number() == self.player_count() && self.is_confirmed(self.current)
    }
}
