//! Game session engine

use super::stats::Statistics;
use crate::core::{DEFAULT_LANGUAGE, GameError, Round, SubmissionResult, start_round};
use crate::dictionary::DictionaryChecker;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for root word selection; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Language tag submissions are checked against
    pub language: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// A playing session
///
/// Owns the active [`Round`] and replaces it wholesale on every submission and reset.
pub struct Game<D: DictionaryChecker> {
    config: GameConfig,
    rng: StdRng,
    candidates: Vec<String>,
    dictionary: D,
    round: Round,
    stats: Statistics,
}

impl<D: DictionaryChecker> Game<D> {
    /// Create a session and start its first round
    ///
    /// # Parameters
    /// - `config`: seed and language
    /// - `candidates`: root word corpus
    /// - `dictionary`: checker for submitted words
    ///
    /// # Errors
    /// Returns [`GameError::Configuration`] if `candidates` holds no usable root word.
    pub fn new(
        config: GameConfig,
        candidates: Vec<String>,
        dictionary: D,
    ) -> Result<Self, GameError> {
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let round = start_round(&candidates, &config.language, &mut rng)?;
        info!(
            root_word = round.root_word(),
            candidates = candidates.len(),
            seed = ?config.seed,
            "round started"
        );

        Ok(Self {
            config,
            rng,
            candidates,
            dictionary,
            round,
            stats: Statistics::default(),
        })
    }

    /// Finish the current round and start a new one
    ///
    /// The current round is only replaced once the new one has started.
    ///
    /// # Errors
    /// Returns [`GameError::Configuration`] if no root word can be chosen; the current
    /// round is left in place.
    pub fn reset(&mut self) -> Result<&Round, GameError> {
        let round = start_round(&self.candidates, &self.config.language, &mut self.rng)?;
        info!(
            root_word = round.root_word(),
            previous_score = self.round.score(),
            "round started"
        );

        self.stats.finish_round(&self.round);
        self.round = round;
        Ok(&self.round)
    }

    /// Submit raw player input to the current round
    pub fn submit(&mut self, raw_input: &str) -> SubmissionResult {
        let (result, round) = self.round.submit(raw_input, &self.dictionary);
        match &result {
            SubmissionResult::Accepted { word, score_delta } => {
                debug!(
                    word = word.as_str(),
                    score_delta,
                    score = round.score(),
                    "word accepted"
                );
            }
            SubmissionResult::Rejected { reason } => {
                debug!(input = raw_input, %reason, "word rejected");
            }
        }

        self.stats.record(&result, &round);
        self.round = round;
        result
    }

    /// Decide what would happen to `raw_input` without applying it
    pub fn evaluate(&self, raw_input: &str) -> SubmissionResult {
        self.round.evaluate(raw_input, &self.dictionary)
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// The root word corpus rounds are drawn from
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}
