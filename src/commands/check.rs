//! Single word check command
//!
//! Runs one word through a fresh round on a given root word.

use crate::core::{GameError, Round, SubmissionResult, normalize};
use crate::dictionary::DictionaryChecker;

/// Result of checking one word
pub struct CheckResult {
    pub root: String,
    /// The word as the round sees it, after normalization
    pub word: String,
    pub result: SubmissionResult,
}

/// Check whether `word` would be accepted on a fresh round for `root`
///
/// # Errors
///
/// Returns an error if `root` is blank.
pub fn check_word<D>(
    root: &str,
    word: &str,
    language: &str,
    dictionary: &D,
) -> Result<CheckResult, GameError>
where
    D: DictionaryChecker + ?Sized,
{
    let round = Round::new(root, language)?;
    let result = round.evaluate(word, dictionary);

    Ok(CheckResult {
        root: round.root_word().to_string(),
        word: normalize(word),
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rejection;
    use crate::dictionary::WordListDictionary;

    #[test]
    fn check_accepted_word() {
        let dictionary = WordListDictionary::embedded();
        let check = check_word("SilkWorm", " Silk ", "en", &dictionary).unwrap();

        assert_eq!(check.root, "silkworm");
        assert_eq!(check.word, "silk");
        assert_eq!(
            check.result,
            SubmissionResult::Accepted {
                word: "silk".to_string(),
                score_delta: 4
            }
        );
    }

    #[test]
    fn check_rejected_words() {
        let dictionary = WordListDictionary::embedded();
        let cases = [
            ("ox", Rejection::TooShort),
            ("silkworm", Rejection::SameAsRoot),
            ("silkworms", Rejection::NotSpellable),
        ];

        for (word, expected) in cases {
            let check = check_word("silkworm", word, "en", &dictionary).unwrap();
            assert_eq!(check.result.rejection(), Some(expected), "word: {word}");
        }
    }

    #[test]
    fn check_unrecognized_word() {
        let dictionary = WordListDictionary::embedded();
        let check = check_word("zzqxab", "zzqx", "en", &dictionary).unwrap();
        assert_eq!(check.result.rejection(), Some(Rejection::NotRecognized));
    }

    #[test]
    fn check_blank_root_fails() {
        let dictionary = WordListDictionary::embedded();
        assert!(check_word("", "silk", "en", &dictionary).is_err());
    }
}
