//! Dictionary checking
//!
//! The round engine only needs a yes/no answer for a word in a language. Any backend that
//! can give one (an embedded word list, a platform spell checker, a remote service wrapped
//! in a blocking call) plugs in through [`DictionaryChecker`].

use crate::core::{DEFAULT_LANGUAGE, GameError, normalize};
use crate::wordlists::{DICTIONARY, loader};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Capability to recognize words
///
/// Implementations must be deterministic: the same word and language always give the same
/// answer for a given dictionary.
pub trait DictionaryChecker {
    /// Whether `word` is a recognized word in `language`
    fn is_valid(&self, word: &str, language: &str) -> bool;
}

impl<F> DictionaryChecker for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_valid(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// Dictionary backed by an in-memory word list for a single language
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary for `language` from a list of words
    ///
    /// Words are trimmed and lowercased; blank entries are skipped.
    pub fn new<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            language: language.to_string(),
            words,
        }
    }

    /// The English dictionary compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use scramble::dictionary::{DictionaryChecker, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::embedded();
    /// assert!(dictionary.is_valid("silk", "en"));
    /// assert!(!dictionary.is_valid("zzqx", "en"));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DEFAULT_LANGUAGE, DICTIONARY)
    }

    /// Load a newline-separated word list for `language`
    ///
    /// # Errors
    /// Returns [`GameError::WordList`] if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P, language: &str) -> Result<Self, GameError> {
        let words = loader::load_from_file(path)?;
        Ok(Self::new(language, words))
    }

    /// Language this dictionary answers for
    #[inline]
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
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

    /// Whether `word` is in the list, ignoring case
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word) || self.words.contains(word.to_lowercase().as_str())
    }

    /// All words, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl DictionaryChecker for WordListDictionary {
    fn is_valid(&self, word: &str, language: &str) -> bool {
        // Language tags compare case-insensitively ("en" == "EN")
        self.language.eq_ignore_ascii_case(language) && self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn closures_are_checkers() {
        let checker = |word: &str, _: &str| word.len() > 3;
        assert!(checker.is_valid("silk", "en"));
        assert!(!checker.is_valid("ox", "en"));
    }

    #[test]
    fn word_list_normalizes_entries() {
        let dictionary = WordListDictionary::new("en", ["  Silk", "WORM\n", "", "   "]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("silk"));
        assert!(dictionary.contains("worm"));
    }

    #[test]
    fn lookups_ignore_case() {
        let dictionary = WordListDictionary::new("en", ["silk"]);
        assert!(dictionary.is_valid("SILK", "en"));
        assert!(dictionary.is_valid("Silk", "EN"));
    }

    #[test]
    fn other_languages_are_not_recognized() {
        let dictionary = WordListDictionary::new("en", ["silk"]);
        assert!(!dictionary.is_valid("silk", "fr"));
        assert!(!dictionary.is_valid("silk", ""));
    }

    #[test]
    fn lookups_are_deterministic() {
        let dictionary = WordListDictionary::embedded();
        for _ in 0..3 {
            assert!(dictionary.is_valid("worm", "en"));
            assert!(!dictionary.is_valid("zzqx", "en"));
        }
    }

    #[test]
    fn embedded_dictionary_knows_silkworm_words() {
        let dictionary = WordListDictionary::embedded();
        assert_eq!(dictionary.language(), "en");
        assert!(!dictionary.is_empty());
        for word in ["silk", "worm", "milk", "slow", "owl", "skim", "work"] {
            assert!(
                dictionary.is_valid(word, "en"),
                "'{word}' should be recognized"
            );
        }
    }

    #[test]
    fn from_file_reads_word_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "silk\nworm\n\nmilk").unwrap();

        let dictionary = WordListDictionary::from_file(file.path(), "en").unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.is_valid("milk", "en"));
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = WordListDictionary::from_file("does/not/exist.txt", "en").unwrap_err();
        assert!(matches!(err, GameError::WordList { .. }));
    }
}
