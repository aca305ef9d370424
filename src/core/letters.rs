//! Letter multisets
//!
//! A letter is an extended grapheme cluster, so `"e\u{301}"` (e + combining acute) counts as
//! one letter, the same way a player would count it.

use rustc_hash::FxHashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Number of user-perceived letters in a word
///
/// # Examples
/// ```
/// use scramble::core::letter_count;
///
/// assert_eq!(letter_count("silk"), 4);
/// assert_eq!(letter_count("cafe\u{301}"), 4);
/// assert_eq!(letter_count(""), 0);
/// ```
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.graphemes(true).count()
}

/// Per-letter counts of a word
///
/// Borrows its letters from the word it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts<'a> {
    counts: FxHashMap<&'a str, usize>,
    total: usize,
}

impl<'a> LetterCounts<'a> {
    /// Count the letters of `word`
    #[must_use]
    pub fn new(word: &'a str) -> Self {
        let mut counts: FxHashMap<&'a str, usize> = FxHashMap::default();
        let mut total = 0;
        for letter in word.graphemes(true) {
            *counts.entry(letter).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// How many times `letter` appears
    #[inline]
    #[must_use]
    pub fn get(&self, letter: &str) -> usize {
        self.counts.get(letter).copied().unwrap_or(0)
    }

    /// Total number of letters, duplicates included
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Check whether `word` can be spelled from these letters
    ///
    /// Each letter of `word` consumes one occurrence from a working copy of the counts.
    /// Spelling fails as soon as a letter has nothing left to consume, so the result does
    /// not depend on the order the letters are taken in.
    ///
    /// # Examples
    /// ```
    /// use scramble::core::LetterCounts;
    ///
    /// let root = LetterCounts::new("silkworm");
    /// assert!(root.can_spell("milk"));
    /// assert!(!root.can_spell("mill")); // only one 'l'
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();
        for letter in word.graphemes(true) {
            match remaining.get_mut(letter) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }
}
