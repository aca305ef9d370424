//! Root word source

use super::{START_WORDS, loader};
use crate::core::GameError;
use std::path::Path;

/// The ordered corpus of candidate root words, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    words: Vec<String>,
}

impl WordSource {
    /// Wrap an already loaded list, normalizing entries and dropping blanks
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        let words = words
            .iter()
            .map(|word| crate::core::normalize(word))
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// The start words compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: loader::words_from_slice(START_WORDS),
        }
    }

    /// Load a newline-separated corpus
    ///
    /// # Errors
    /// Returns [`GameError::WordList`] if the file cannot be read. An empty file is not an
    /// error here; starting a round from it is.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        Ok(Self {
            words: loader::load_from_file(path)?,
        })
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}
