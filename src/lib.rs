//! Scramble
//!
//! A word game: spell as many words as you can from the letters of a random root word.
//!
//! # Quick Start
//!
//! ```rust
//! use scramble::core::{Rejection, Round, SubmissionResult};
//!
//! let round = Round::new("silkworm", "en").unwrap();
//! let dictionary = |word: &str, _language: &str| word == "silk";
//!
//! let (result, round) = round.submit("Silk", &dictionary);
//! assert!(result.is_accepted());
//! assert_eq!(round.score(), 4);
//!
//! let (result, _) = round.submit("silk", &dictionary);
//! assert_eq!(result.rejection(), Some(Rejection::AlreadyUsed));
//! ```

// Core domain types and the round state machine
pub mod core;

// Dictionary checking
pub mod dictionary;

// Word lists
pub mod wordlists;

// Game session (round lifecycle, seeded randomness, statistics)
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
