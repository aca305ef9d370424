//! Game session
//!
//! Ties a root word corpus, a dictionary and a seeded random source to the round engine,
//! and keeps statistics across rounds.

mod engine;
mod stats;

pub use engine::{Game, GameConfig};
pub use stats::Statistics;
