//! Cross-round statistics

use crate::core::{Rejection, Round, SubmissionResult};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    /// Rounds that were finished by a reset
    pub rounds_played: usize,
    pub words_accepted: usize,
    pub best_score: usize,
    rejections: [usize; Rejection::ALL.len()],
}

impl Statistics {
    /// Number of submissions rejected for `reason`
    #[must_use]
    pub const fn rejections(&self, reason: Rejection) -> usize {
        self.rejections[reason.index()]
    }

    /// Number of rejected submissions across all reasons
    #[must_use]
    pub fn total_rejections(&self) -> usize {
        self.rejections.iter().sum()
    }

    pub(crate) fn record(&mut self, result: &SubmissionResult, round: &Round) {
        match result {
            SubmissionResult::Accepted { .. } => {
                self.words_accepted += 1;
                self.best_score = self.best_score.max(round.score());
            }
            SubmissionResult::Rejected { reason } => {
                self.rejections[reason.index()] += 1;
            }
        }
    }

    pub(crate) fn finish_round(&mut self, round: &Round) {
        self.rounds_played += 1;
        self.best_score = self.best_score.max(round.score());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_accepted_and_rejected() {
        let mut stats = Statistics::default();
        let always = |_: &str, _: &str| true;

        let round = Round::new("silkworm", "en").unwrap();
        let (result, round) = round.submit("silk", &always);
        stats.record(&result, &round);
        let (result, round) = round.submit("silk", &always);
        stats.record(&result, &round);
        let (result, round) = round.submit("ox", &always);
        stats.record(&result, &round);

        assert_eq!(stats.words_accepted, 1);
        assert_eq!(stats.best_score, 4);
        assert_eq!(stats.rejections(Rejection::AlreadyUsed), 1);
        assert_eq!(stats.rejections(Rejection::TooShort), 1);
        assert_eq!(stats.rejections(Rejection::NotRecognized), 0);
        assert_eq!(stats.total_rejections(), 2);
    }

    #[test]
    fn finish_round_keeps_best_score() {
        let mut stats = Statistics::default();
        let always = |_: &str, _: &str| true;

        let (_, round) = Round::new("silkworm", "en")
            .unwrap()
            .submit("worm", &always);
        stats.finish_round(&round);
        stats.finish_round(&Round::new("airplane", "en").unwrap());

        assert_eq!(stats.rounds_played, 2);
        assert_eq!(stats.best_score, 4);
    }
}
