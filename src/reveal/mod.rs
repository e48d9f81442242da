//! Sequential role reveal.
//!
//! The device is passed around the table. Each seat in turn confirms, sees
//! its own role and what that role is allowed to know, then hands over to the
//! next seat. A seat's role is never shown before that seat confirms.

mod sequencer;

pub use sequencer::{Disclosure, RevealSequencer};
