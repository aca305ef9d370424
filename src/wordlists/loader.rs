//! Word list loading utilities
//!
//! Word lists are plain text, one lowercase word per line.

use crate::core::{GameError, normalize};
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Entries are trimmed and lowercased. Blank lines are skipped, so an empty file yields an
/// empty list rather than an error.
///
/// # Errors
///
/// Returns [`GameError::WordList`] if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, GameError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GameError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_word_list(&content))
}

/// Split newline-separated text into normalized words
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Convert an embedded string slice to owned, normalized words
///
/// # Examples
/// ```
/// use scramble::wordlists::START_WORDS;
/// use scramble::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|&word| normalize(word))
        .filter(|word| !word.is_empty())
        .collect()
}
