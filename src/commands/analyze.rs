//! Root word analysis command
//!
//! Finds every dictionary word a round on a given root word would accept.

use crate::core::{GameError, Round, letter_count};
use crate::dictionary::WordListDictionary;
use rayon::prelude::*;

/// Result of analyzing a root word
#[derive(Debug, Clone)]
pub struct RootAnalysis {
    pub root: String,
    /// Achievable words, longest first
    pub words: Vec<String>,
    /// Score for finding every achievable word
    pub max_score: usize,
}

impl RootAnalysis {
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The longest achievable word, if any
    #[must_use]
    pub fn longest(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }
}

/// Every dictionary word `round` would still accept
///
/// Words already used in the round are excluded. Sorted longest first, then alphabetically.
#[must_use]
pub fn achievable_words(round: &Round, dictionary: &WordListDictionary) -> Vec<String> {
    let mut words: Vec<(usize, String)> = dictionary
        .words()
        .collect::<Vec<_>>()
        .par_iter()
        .filter(|&&word| round.evaluate(word, dictionary).is_accepted())
        .map(|&word| (letter_count(word), word.to_string()))
        .collect();

    words.sort_unstable_by(|(len_a, a), (len_b, b)| {
        len_b.cmp(len_a).then_with(|| a.cmp(b))
    });
    words.into_iter().map(|(_, word)| word).collect()
}

/// Analyze a fresh round on `root`
///
/// # Errors
///
/// Returns an error if `root` is blank.
pub fn analyze_root(
    root: &str,
    dictionary: &WordListDictionary,
) -> Result<RootAnalysis, GameError> {
    let round = Round::new(root, dictionary.language())?;
    let words = achievable_words(&round, dictionary);
    let max_score = words.iter().map(|word| letter_count(word)).sum();

    Ok(RootAnalysis {
        root: round.root_word().to_string(),
        words,
        max_score,
    })
}
