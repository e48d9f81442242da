//! Session controller: the only entry point for the presentation layer.
//!
//! ```text
//! Setup -> RoleCheck -> TimerSetup -> Countdown -> Vote -> Resolved
//!   ^                                                          |
//!   +------------------------- reset (from any phase) ---------+
//! ```
//!
//! Every operation either applies fully or fails with the session unchanged.

mod phase;
mod controller;

pub use phase::Phase;
pub use controller::{GameSession, LiarSession, LiarSessionBuilder};
