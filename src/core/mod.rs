//! Core domain types for Scramble
//!
//! This module contains the round state machine and the letter arithmetic behind it.
//! Everything here is pure: the only collaborator is the dictionary passed into a submission.

mod error;
mod letters;
mod round;

pub use error::GameError;
pub use letters::{LetterCounts, letter_count};
pub use round::{
    DEFAULT_LANGUAGE, MIN_WORD_LENGTH, Rejection, Round, SubmissionResult, normalize, start_round,
};
