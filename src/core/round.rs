//! Round state and the submission pipeline
//!
//! A [`Round`] is an immutable value. Submitting a word never changes the round it was
//! submitted against; it yields the decision plus the round that follows from it.

use super::error::GameError;
use super::letters::{LetterCounts, letter_count};
use crate::dictionary::DictionaryChecker;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest accepted word, in letters
pub const MIN_WORD_LENGTH: usize = 3;

/// Language tag used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Why a submission was turned down
///
/// Variants are listed in pipeline order: when a word fails several checks,
/// the first one listed here is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    TooShort,
    SameAsRoot,
    AlreadyUsed,
    NotSpellable,
    NotRecognized,
}

impl Rejection {
    /// Every rejection, in pipeline order
    pub const ALL: [Self; 5] = [
        Self::TooShort,
        Self::SameAsRoot,
        Self::AlreadyUsed,
        Self::NotSpellable,
        Self::NotRecognized,
    ];

    /// Position of this rejection in the pipeline
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::TooShort => 0,
            Self::SameAsRoot => 1,
            Self::AlreadyUsed => 2,
            Self::NotSpellable => 3,
            Self::NotRecognized => 4,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "too short"),
            Self::SameAsRoot => write!(f, "same as root word"),
            Self::AlreadyUsed => write!(f, "already used"),
            Self::NotSpellable => write!(f, "not spellable"),
            Self::NotRecognized => write!(f, "not recognized"),
        }
    }
}

/// Outcome of one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionResult {
    /// The normalized word was added to the round, scoring `score_delta`
    Accepted { word: String, score_delta: usize },
    /// The round is unchanged
    Rejected { reason: Rejection },
}

impl SubmissionResult {
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The rejection reason, if rejected
    #[inline]
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { reason } => Some(*reason),
        }
    }
}

/// Normalize raw player input: trim surrounding whitespace and lowercase
///
/// # Examples
/// ```
/// use scramble::core::normalize;
///
/// assert_eq!(normalize("  SilK\n"), "silk");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// One playthrough: a fixed root word, the words found so far and the score
///
/// Deserializing re-checks everything [`Round::new`] and [`Round::submit`] guarantee, so a
/// saved round cannot be resumed in a state play could never reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoundData")]
pub struct Round {
    root_word: String,
    language: String,
    used_words: Vec<String>,
    score: usize,
}

impl Round {
    /// Start a fresh round on `root_word`, checking words against `language`
    ///
    /// The root word is normalized the same way submissions are.
    ///
    /// # Errors
    /// Returns [`GameError::Configuration`] if the root word is blank.
    pub fn new(root_word: &str, language: &str) -> Result<Self, GameError> {
        let root_word = normalize(root_word);
        if root_word.is_empty() {
            return Err(GameError::configuration("root word is blank"));
        }

        Ok(Self {
            root_word,
            language: language.to_string(),
            used_words: Vec::new(),
            score: 0,
        })
    }

    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Language tag passed to the dictionary
    #[inline]
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Sum of the letter counts of all accepted words
    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Whether `word` (already normalized) has been accepted this round
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|used| used == word)
    }

    /// Decide what would happen to `raw_input` without applying it
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// length, identity with the root, repeats, spellability, and finally the dictionary.
    /// The dictionary is only consulted for words that pass everything else.
    pub fn evaluate<D>(&self, raw_input: &str, dictionary: &D) -> SubmissionResult
    where
        D: DictionaryChecker + ?Sized,
    {
        let word = normalize(raw_input);
        match self.validate(&word, dictionary) {
            Ok(score_delta) => SubmissionResult::Accepted { word, score_delta },
            Err(reason) => SubmissionResult::Rejected { reason },
        }
    }

    /// Submit `raw_input`, returning the decision and the round that follows it
    ///
    /// On rejection the returned round equals `self`.
    #[must_use]
    pub fn submit<D>(&self, raw_input: &str, dictionary: &D) -> (SubmissionResult, Self)
    where
        D: DictionaryChecker + ?Sized,
    {
        let result = self.evaluate(raw_input, dictionary);
        let mut next = self.clone();
        if let SubmissionResult::Accepted { word, score_delta } = &result {
            next.used_words.insert(0, word.clone());
            next.score += score_delta;
        }
        (result, next)
    }

    /// Run the pipeline on a normalized word, returning its score on success
    fn validate<D>(&self, word: &str, dictionary: &D) -> Result<usize, Rejection>
    where
        D: DictionaryChecker + ?Sized,
    {
        let length = letter_count(word);
        if length < MIN_WORD_LENGTH {
            return Err(Rejection::TooShort);
        }

        if word == self.root_word {
            return Err(Rejection::SameAsRoot);
        }

        if self.is_used(word) {
            return Err(Rejection::AlreadyUsed);
        }

        if !LetterCounts::new(&self.root_word).can_spell(word) {
            return Err(Rejection::NotSpellable);
        }

        if !dictionary.is_valid(word, &self.language) {
            return Err(Rejection::NotRecognized);
        }

        Ok(length)
    }
}

/// Unchecked form of a saved [`Round`]
#[derive(Deserialize)]
struct RoundData {
    root_word: String,
    language: String,
    used_words: Vec<String>,
    score: usize,
}

impl TryFrom<RoundData> for Round {
    type Error = GameError;

    fn try_from(data: RoundData) -> Result<Self, Self::Error> {
        let RoundData {
            root_word,
            language,
            used_words,
            score,
        } = data;

        if root_word.trim().is_empty() {
            return Err(GameError::configuration("root word is blank"));
        }
        if normalize(&root_word) != root_word {
            return Err(GameError::configuration(format!(
                "root word '{root_word}' is not normalized"
            )));
        }

        let root = LetterCounts::new(&root_word);
        let mut total = 0;
        for (i, word) in used_words.iter().enumerate() {
            let valid = normalize(word) == *word
                && letter_count(word) >= MIN_WORD_LENGTH
                && *word != root_word
                && root.can_spell(word);
            if !valid {
                return Err(GameError::configuration(format!(
                    "used word '{word}' could not have been accepted for '{root_word}'"
                )));
            }
            if used_words[..i].contains(word) {
                return Err(GameError::configuration(format!(
                    "used word '{word}' appears more than once"
                )));
            }
            total += letter_count(word);
        }

        if total != score {
            return Err(GameError::configuration(format!(
                "score {score} does not match the used words ({total})"
            )));
        }

        Ok(Self {
            root_word,
            language,
            used_words,
            score,
        })
    }
}

/// Start a round on a root word chosen uniformly at random from `candidates`
///
/// Candidates are trimmed and lowercased; blank entries are never chosen.
///
/// # Errors
/// Returns [`GameError::Configuration`] if there is no non-blank candidate.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use scramble::core::start_round;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let round = start_round(&["Silkworm"], "en", &mut rng).unwrap();
/// assert_eq!(round.root_word(), "silkworm");
/// assert_eq!(round.score(), 0);
///
/// let empty: [&str; 0] = [];
/// assert!(start_round(&empty, "en", &mut rng).is_err());
/// ```
pub fn start_round<S, R>(candidates: &[S], language: &str, rng: &mut R) -> Result<Round, GameError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let eligible: Vec<&str> = candidates
        .iter()
        .map(|candidate| candidate.as_ref().trim())
        .filter(|candidate| !candidate.is_empty())
        .collect();

    let root_word = eligible
        .choose(rng)
        .ok_or_else(|| GameError::configuration("no candidate root words to start a round"))?;

    Round::new(root_word, language)
}
