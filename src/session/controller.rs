//! The session controller and its game aggregate.

use tracing::{debug, info};

use crate::core::{Clock, GameRng, GameRules, MonotonicClock, PlayerId};
use crate::error::{LiarError, Result};
use crate::reveal::{Disclosure, RevealSequencer};
use crate::roles::{Role, RoleAllocator, RoleAssignment};
use crate::timer::Countdown;
use crate::topics::{Topic, TopicCatalog};
use crate::vote::{self, Outcome};

use super::Phase;

/// Everything belonging to one game, from dealing to the verdict.
///
/// Created by `start_roles`, discarded by `reset`. Roles and the topic are
/// not exposed; they only leave through the reveal gate. `Debug` prints
/// progress only.
#[derive(Clone)]
pub struct GameSession {
    topic: Topic,
    roles: RoleAssignment,
    reveal: RevealSequencer,
    phase: Phase,
    timer: Option<Countdown>,
    accused: Option<PlayerId>,
    outcome: Option<Outcome>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("phase", &self.phase)
            .field("player_count", &self.player_count())
            .field("current_player", &self.current_player())
            .field("confirmed", &self.reveal.confirmed_count())
            .field("timer", &self.timer.map(|t| t.total_seconds()))
            .field("accused", &self.accused)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    fn new(topic: Topic, roles: RoleAssignment) -> Self {
        let reveal = RevealSequencer::new(roles.player_count());
        Self {
            topic,
            roles,
            reveal,
            phase: Phase::RoleCheck,
            timer: None,
            accused: None,
            outcome: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roles.player_count()
    }

    /// The seat holding the device during the reveal.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.reveal.current()
    }

    /// Reveal progress.
    #[must_use]
    pub fn reveal(&self) -> &RevealSequencer {
        &self.reveal
    }

    /// The discussion timer, once started.
    #[must_use]
    pub fn timer(&self) -> Option<&Countdown> {
        self.timer.as_ref()
    }

    /// The accused seat, once the vote is in.
    #[must_use]
    pub fn accused(&self) -> Option<PlayerId> {
        self.accused
    }

    /// The outcome, once the vote is in.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

/// Builder for a `LiarSession`.
pub struct LiarSessionBuilder {
    rules: GameRules,
    seed: Option<u64>,
}

impl Default for LiarSessionBuilder {
    fn default() -> Self {
        Self {
            rules: GameRules::default(),
            seed: None,
        }
    }
}

impl LiarSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    /// Fix the dealing seed. Without one the RNG is seeded from the OS.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build a session on the system monotonic clock.
    pub fn build(self) -> LiarSession<MonotonicClock> {
        self.build_with_clock(MonotonicClock)
    }

    /// Build a session reading time from `clock`.
    pub fn build_with_clock<C: Clock>(self, clock: C) -> LiarSession<C> {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        LiarSession {
            allocator: RoleAllocator::new(self.rules),
            rng,
            clock,
            game: None,
        }
    }
}

/// Drives one table through the phases of a game.
///
/// ## Example
///
/// ```
/// use liar_game::{LiarSessionBuilder, ManualClock, Phase, Topic};
///
/// let clock = ManualClock::new();
/// let mut session = LiarSessionBuilder::new().seed(7).build_with_clock(clock.clone());
///
/// session.start_roles(3, Topic::new("Q", "1~100").unwrap()).unwrap();
/// for _ in 0..2 {
///     session.confirm_current().unwrap();
///     session.advance().unwrap();
/// }
/// session.confirm_current().unwrap();
/// assert_eq!(session.phase(), Phase::TimerSetup);
///
/// session.start_timer(0, 30).unwrap();
/// clock.advance_secs(30);
/// assert!(session.is_expired().unwrap());
/// assert_eq!(session.phase(), Phase::Vote);
/// ```
pub struct LiarSession<C: Clock = MonotonicClock> {
    allocator: RoleAllocator,
    rng: GameRng,
    clock: C,
    game: Option<GameSession>,
}

impl LiarSession<MonotonicClock> {
    /// A session with the standard rules, an OS-seeded RNG and the system clock.
    #[must_use]
    pub fn new() -> Self {
        LiarSessionBuilder::new().build()
    }
}

impl Default for LiarSession<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> LiarSession<C> {
    /// The rules this session deals by.
    #[must_use]
    pub fn rules(&self) -> &GameRules {
        self.allocator.rules()
    }

    /// Current phase. `Setup` when no game is running.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.game.as_ref().map_or(Phase::Setup, GameSession::phase)
    }

    /// The running game, if any.
    #[must_use]
    pub fn game(&self) -> Option<&GameSession> {
        self.game.as_ref()
    }

    /// The seat holding the device, once roles are dealt.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.game.as_ref().map(GameSession::current_player)
    }

    /// The outcome, once resolved.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.game.as_ref().and_then(GameSession::outcome)
    }

    /// Number of seats in the running game.
    #[must_use]
    pub fn player_count(&self) -> Option<usize> {
        self.game.as_ref().map(GameSession::player_count)
    }

    fn game_in(&mut self, phase: Phase, operation: &str) -> Result<&mut GameSession> {
        match self.game.as_mut() {
            Some(game) if game.phase == phase => Ok(game),
            Some(game) => Err(LiarError::wrong_phase(game.phase, operation)),
            None => Err(LiarError::wrong_phase(Phase::Setup, operation)),
        }
    }

    fn dealt_game(&self, operation: &str) -> Result<&GameSession> {
        self.game
            .as_ref()
            .ok_or_else(|| LiarError::wrong_phase(Phase::Setup, operation))
    }

    // === Setup ===

    /// Deal roles for `player_count` seats and start the reveal at seat 1.
    pub fn start_roles(&mut self, player_count: usize, topic: Topic) -> Result<()> {
        if let Some(game) = &self.game {
            return Err(LiarError::wrong_phase(game.phase, "start roles"));
        }

        let roles = self.allocator.allocate(player_count, &mut self.rng)?;
        self.game = Some(GameSession::new(topic, roles));

        info!(player_count, phase = ?Phase::RoleCheck, "roles dealt");
        Ok(())
    }

    /// Deal roles using the topic at `index` in `catalog`.
    pub fn start_roles_from_catalog(
        &mut self,
        player_count: usize,
        catalog: &TopicCatalog,
        index: usize,
    ) -> Result<()> {
        if let Some(game) = &self.game {
            return Err(LiarError::wrong_phase(game.phase, "start roles"));
        }
        let topic = catalog.get(index)?.clone();
        self.start_roles(player_count, topic)
    }

    // === RoleCheck ===

    /// Confirm the current seat and return what it may see.
    ///
    /// Confirming the last seat moves the game to `TimerSetup`.
    pub fn confirm_current(&mut self) -> Result<Disclosure> {
        let game = self.game_in(Phase::RoleCheck, "confirm a role")?;
        let player = game.reveal.confirm_current()?;
        let disclosure = game.reveal.disclosure(player, &game.roles, &game.topic)?;

        if game.reveal.is_complete() {
            game.phase = Phase::TimerSetup;
            info!(phase = ?game.phase, "all players have seen their roles");
        }
        Ok(disclosure)
    }

    /// The role of a seat that has already confirmed.
    pub fn role_for(&self, player: PlayerId) -> Result<Role> {
        let game = self.dealt_game("look up a role")?;
        game.reveal.role_for(player, &game.roles)
    }

    /// What a confirmed seat may see of the topic.
    pub fn disclosure(&self, player: PlayerId) -> Result<Disclosure> {
        let game = self.dealt_game("show a role")?;
        game.reveal.disclosure(player, &game.roles, &game.topic)
    }

    /// Pass the device to the next seat.
    pub fn advance(&mut self) -> Result<PlayerId> {
        let game = self.game_in(Phase::RoleCheck, "pass to the next player")?;
        game.reveal.advance()
    }

    /// True once every seat has confirmed.
    #[must_use]
    pub fn is_sequence_complete(&self) -> bool {
        self.game.as_ref().is_some_and(|g| g.reveal.is_complete())
    }

    // === TimerSetup ===

    /// Start the discussion timer at `minutes:seconds`.
    pub fn start_timer(&mut self, minutes: u32, seconds: u32) -> Result<()> {
        let phase = self.phase();
        if phase != Phase::TimerSetup {
            return Err(LiarError::wrong_phase(phase, "start the timer"));
        }
        let timer = Countdown::from_fields(minutes, seconds, self.allocator.rules(), self.clock.now())?;

        let game = self.game_in(Phase::TimerSetup, "start the timer")?;
        game.timer = Some(timer);
        game.phase = Phase::Countdown;

        info!(total_seconds = timer.total_seconds(), phase = ?game.phase, "discussion started");
        Ok(())
    }

    // === Countdown ===

    /// Seconds left in the discussion.
    ///
    /// Observing zero moves the game to `Vote`. After that the timer reads zero.
    pub fn remaining(&mut self) -> Result<u32> {
        let now = self.clock.now();
        let game = match self.game.as_mut() {
            Some(game) if matches!(game.phase, Phase::Countdown | Phase::Vote | Phase::Resolved) => game,
            Some(game) => return Err(LiarError::wrong_phase(game.phase, "read the timer")),
            None => return Err(LiarError::wrong_phase(Phase::Setup, "read the timer")),
        };
        if game.phase != Phase::Countdown {
            return Ok(0);
        }

        let Some(timer) = game.timer else {
            return Err(LiarError::wrong_phase(game.phase, "read the timer"));
        };
        let remaining = timer.remaining(now);
        if remaining == 0 {
            game.phase = Phase::Vote;
            info!(phase = ?game.phase, "discussion time is up");
        } else {
            debug!(remaining, "timer polled");
        }
        Ok(remaining)
    }

    /// True once discussion time is up.
    pub fn is_expired(&mut self) -> Result<bool> {
        Ok(self.remaining()? == 0)
    }

    // === Vote ===

    /// Record the table's accusation and decide the game.
    pub fn resolve(&mut self, accused: PlayerId) -> Result<Outcome> {
        let game = self.game_in(Phase::Vote, "resolve a vote")?;
        let outcome = vote::resolve(accused, &game.roles)?;

        game.accused = Some(accused);
        game.outcome = Some(outcome);
        game.phase = Phase::Resolved;

        info!(accused = accused.number(), ?outcome, "game resolved");
        Ok(outcome)
    }

    /// Reveal every seat's role. Only available once the game is resolved.
    pub fn final_roles(&self) -> Result<&RoleAssignment> {
        let game = self.dealt_game("show the final roles")?;
        if !game.phase.is_terminal() {
            return Err(LiarError::wrong_phase(game.phase, "show the final roles"));
        }
        Ok(&game.roles)
    }

    // === Any phase ===

    /// Throw the current game away and return to `Setup`.
    pub fn reset(&mut self) {
        if let Some(game) = self.game.take() {
            info!(from = ?game.phase, "session reset");
        }
    }
}
