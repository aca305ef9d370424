//! Word lists for Scramble
//!
//! Provides the root word corpus and the dictionary, both embedded into the binary, and the
//! [`WordSource`] that hands candidate root words to a new round.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use source::WordSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_lowercase() {
        assert!(!START_WORDS.is_empty());
        for &word in START_WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_long_enough_to_play() {
        for &word in START_WORDS {
            assert!(word.len() >= 6, "Root word '{word}' is too short");
        }
    }

    #[test]
    fn silkworm_is_a_start_word() {
        assert!(START_WORDS.contains(&"silkworm"));
    }

    #[test]
    fn dictionary_entries_are_lowercase() {
        for &word in &DICTIONARY[..50] {
            // Just check the first 50 for speed
            assert_eq!(word, word.to_lowercase(), "Word '{word}' is not lowercase");
        }
    }
}
