//! Final accusation vote.

mod resolver;

pub use resolver::{resolve, Outcome};
