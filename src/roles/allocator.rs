//! Role dealing.
//!
//! The allocator builds the role multiset for the table size, then applies a
//! uniform shuffle, so every arrangement of that multiset is equally likely.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, GameRules, PlayerId, PlayerMap};
use crate::error::{LiarError, Result};

use super::Role;

/// How many of each role a deal contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub liars: usize,
    pub trolls: usize,
    pub citizens: usize,
}

impl RoleCounts {
    /// Total number of seats covered.
    #[must_use]
    pub fn total(&self) -> usize {
        self.liars + self.trolls + self.citizens
    }
}

fn counts_for(rules: &GameRules, player_count: usize) -> Result<RoleCounts> {
    let invalid = || LiarError::InvalidPlayerCount {
        count: player_count,
        min: rules.min_players,
        max: rules.max_players,
    };
    if !rules.allows_players(player_count) || player_count > usize::from(u8::MAX) {
        return Err(invalid());
    }

    let trolls = usize::from(rules.has_troll(player_count));
    let citizens = player_count.checked_sub(1 + trolls).ok_or_else(invalid)?;
    Ok(RoleCounts { liars: 1, trolls, citizens })
}

/// One role per seat, fixed for the whole game.
///
/// There is no way to mutate an assignment after it is dealt. It serializes
/// for logs of finished games but can only be built by dealing or through the
/// checked `from_seat_order`. `Debug` shows the table size only, never roles.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RoleAssignment {
    roles: PlayerMap<Role>,
}

impl std::fmt::Debug for RoleAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleAssignment")
            .field("player_count", &self.player_count())
            .finish_non_exhaustive()
    }
}

impl RoleAssignment {
    /// Build an assignment from roles listed in seat order.
    ///
    /// Returns `None` unless the table size is allowed by `rules` and the
    /// composition is exactly what `rules` deals for that size.
    /// Useful for replaying a known deal.
    #[must_use]
    pub fn from_seat_order(roles: impl IntoIterator<Item = Role>, rules: &GameRules) -> Option<Self> {
        let roles = PlayerMap::from_seat_order(roles)?;
        let assignment = Self { roles };
        let expected = counts_for(rules, assignment.player_count()).ok()?;
        (assignment.counts() == expected).then_some(assignment)
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roles.player_count()
    }

    /// The role at `player`, or `None` if the seat doesn't exist.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<Role> {
        self.roles.get(player).copied()
    }

    /// The Liar's seat.
    #[must_use]
    pub fn liar(&self) -> Option<PlayerId> {
        self.seat_of(Role::Liar)
    }

    /// The Troll's seat, if the table has one.
    #[must_use]
    pub fn troll(&self) -> Option<PlayerId> {
        self.seat_of(Role::Troll)
    }

    fn seat_of(&self, role: Role) -> Option<PlayerId> {
        self.roles.iter().find(|(_, &r)| r == role).map(|(p, _)| p)
    }

    /// Count each role in the deal.
    #[must_use]
    pub fn counts(&self) -> RoleCounts {
        let mut counts = RoleCounts { liars: 0, trolls: 0, citizens: 0 };
        for role in self.roles.values() {
            match role {
                Role::Liar => counts.liars += 1,
                Role::Troll => counts.trolls += 1,
                Role::Citizen => counts.citizens += 1,
            }
        }
        counts
    }

    /// Iterate over (seat, role) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, Role)> + '_ {
        self.roles.iter().map(|(p, &r)| (p, r))
    }
}

/// Deals roles according to a table-size policy.
#[derive(Clone, Debug, Default)]
pub struct RoleAllocator {
    rules: GameRules,
}

impl RoleAllocator {
    /// Create an allocator for the given rules.
    #[must_use]
    pub fn new(rules: GameRules) -> Self {
        Self { rules }
    }

    /// The rules this allocator deals by.
    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Role composition for a table of `player_count` players.
    pub fn counts_for(&self, player_count: usize) -> Result<RoleCounts> {
        counts_for(&self.rules, player_count)
    }

    /// Deal a fresh, shuffled assignment.
    pub fn allocate(&self, player_count: usize, rng: &mut GameRng) -> Result<RoleAssignment> {
        let counts = self.counts_for(player_count)?;

        let mut deck: Vec<Role> = Vec::with_capacity(player_count);
        deck.push(Role::Liar);
        deck.extend(std::iter::repeat(Role::Troll).take(counts.trolls));
        deck.extend(std::iter::repeat(Role::Citizen).take(counts.citizens));
        rng.shuffle(&mut deck);

        debug!(player_count, trolls = counts.trolls, "dealt roles");

        Ok(RoleAssignment {
            roles: PlayerMap::new(player_count, |p| deck[p.index()]),
        })
    }
}
