//! Game errors
//!
//! Rejected submissions are not errors; they are reported through
//! [`SubmissionResult`](super::SubmissionResult). These are the faults that stop a round
//! from being played at all.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// The game was set up with nothing to play, e.g. an empty root word corpus
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A word list file could not be read
    #[error("failed to read word list {}: {source}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GameError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether this is a configuration error
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_display() {
        let err = GameError::configuration("no candidate root words");
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "configuration error: no candidate root words"
        );
    }

    #[test]
    fn word_list_error_keeps_source() {
        use std::error::Error as _;

        let err = GameError::WordList {
            path: PathBuf::from("data/missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(!err.is_configuration());
        assert!(err.to_string().contains("data/missing.txt"));
        assert!(err.source().is_some());
    }
}
