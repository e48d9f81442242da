//! # liar-game
//!
//! Session state machine for "Liar", a pass-the-device party game.
//!
//! One hidden player (the Liar) doesn't know the secret question. From four
//! players up, a second hidden player (the Troll) knows it but plays to
//! protect the Liar. Everyone else (Citizens) knows the question and tries to
//! find the Liar before the discussion timer runs out.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The crate renders nothing. A UI calls into
//!    `LiarSession` with user actions and draws whatever state comes back.
//!
//! 2. **Confirm Before Reveal**: A seat's role is only readable after that
//!    seat confirms, and the Liar's view never contains the question.
//!
//! 3. **Polled Time**: The countdown reads an injected `Clock` when asked.
//!    There are no background threads.
//!
//! ## Modules
//!
//! - `core`: Seats, per-seat storage, RNG, clock, rules
//! - `topics`: Topic values and the catalog
//! - `roles`: Roles and the allocator
//! - `reveal`: Sequential confirm-then-reveal
//! - `timer`: Discussion countdown
//! - `vote`: Accusation outcome
//! - `session`: Phase state machine

pub mod core;
pub mod error;
pub mod topics;
pub mod roles;
pub mod reveal;
pub mod timer;
pub mod vote;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRules,
    Clock, ManualClock, MonotonicClock,
};

pub use crate::error::{LiarError, Result};

pub use crate::topics::{Topic, TopicCatalog, TopicField};

pub use crate::roles::{Role, RoleAllocator, RoleAssignment, RoleCounts};

pub use crate::reveal::{Disclosure, RevealSequencer};

pub use crate::timer::{format_remaining, Countdown};

pub use crate::vote::{resolve, Outcome};

pub use crate::session::{GameSession, LiarSession, LiarSessionBuilder, Phase};
