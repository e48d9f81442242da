//! Discussion countdown.
//!
//! The countdown holds no thread and never ticks by itself. Remaining time is
//! a pure function of the start instant and whatever instant the caller
//! passes in, so callers poll at their own cadence.

mod countdown;

pub use countdown::{format_remaining, Countdown};
