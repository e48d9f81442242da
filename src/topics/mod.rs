//! Topics: the secret question and its range hint.
//!
//! The catalog is loaded by the caller (from whatever storage it uses) and
//! read once when a game starts. The core never mutates a `Topic`.

mod catalog;

pub use catalog::{Topic, TopicCatalog, TopicField};
