//! Core types: seats, per-seat storage, RNG, clock, configuration.
//!
//! Everything here is independent of the Liar rules themselves; the game
//! modules build on these.

pub mod player;
pub mod rng;
pub mod config;
pub mod clock;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::GameRules;
pub use clock::{Clock, ManualClock, MonotonicClock};
