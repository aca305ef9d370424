//! End-to-end round scenarios against the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use scramble::core::{LetterCounts, Rejection, Round, SubmissionResult, letter_count, start_round};
use scramble::dictionary::{DictionaryChecker, WordListDictionary};
use scramble::game::{Game, GameConfig};
use scramble::wordlists::WordSource;

fn silkworm() -> Round {
    Round::new("silkworm", "en").unwrap()
}

#[test]
fn silk_is_accepted_then_already_used() {
    let dictionary = WordListDictionary::embedded();

    let (result, round) = silkworm().submit("silk", &dictionary);
    assert_eq!(
        result,
        SubmissionResult::Accepted {
            word: "silk".to_string(),
            score_delta: 4
        }
    );
    assert_eq!(round.score(), 4);
    assert_eq!(round.used_words(), ["silk"]);

    let (result, round) = round.submit("silk", &dictionary);
    assert_eq!(result.rejection(), Some(Rejection::AlreadyUsed));
    assert_eq!(round.score(), 4);
}

#[test]
fn scenario_rejections() {
    let dictionary = WordListDictionary::embedded();
    let round = silkworm();

    assert_eq!(
        round.evaluate("ox", &dictionary).rejection(),
        Some(Rejection::TooShort)
    );
    assert_eq!(
        round.evaluate("silkworms", &dictionary).rejection(),
        Some(Rejection::NotSpellable)
    );
    assert_eq!(
        round.evaluate("silkworm", &dictionary).rejection(),
        Some(Rejection::SameAsRoot)
    );
}

#[test]
fn made_up_word_is_not_recognized() {
    // Root built so that "zzqx" is long enough, novel and spellable
    let round = Round::new("zzqxyy", "en").unwrap();
    let result = round.evaluate("zzqx", &WordListDictionary::embedded());
    assert_eq!(result.rejection(), Some(Rejection::NotRecognized));
}

#[test]
fn accepted_words_are_sub_multisets_of_root() {
    let dictionary = WordListDictionary::embedded();
    let inputs = [
        "silk", "worm", "milk", "owl", "slow", "skim", "wool", "mill", "silkworm", "oil", "soil",
        "ox", "rows", "lows", "silks", "work", "works", "worms", "limo", "kilo", "",
    ];

    let mut round = silkworm();
    let mut accepted_lengths = 0;
    for input in inputs {
        let (result, next) = round.submit(input, &dictionary);
        if let SubmissionResult::Accepted { word, score_delta } = &result {
            assert!(LetterCounts::new("silkworm").can_spell(word));
            assert!(letter_count(word) > 2);
            assert_ne!(word, "silkworm");
            assert_eq!(*score_delta, letter_count(word));
            accepted_lengths += score_delta;
        } else {
            assert_eq!(next, round);
        }
        round = next;
    }

    // No duplicates, and score is the sum of accepted lengths
    let mut unique = round.used_words().to_vec();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), round.used_words().len());
    assert_eq!(round.score(), accepted_lengths);
    assert!(round.used_words().len() > 5);
}

#[test]
fn repeated_invalid_input_gives_same_reason() {
    let dictionary = WordListDictionary::embedded();
    let round = silkworm();

    for input in ["ox", "silkworm", "silkworms", "zzqx", "   "] {
        let first = round.evaluate(input, &dictionary);
        let (second, after) = round.submit(input, &dictionary);
        let (third, _) = after.submit(input, &dictionary);
        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(after, round);
    }
}

#[test]
fn start_round_from_embedded_source() {
    let source = WordSource::embedded();
    let mut rng = StdRng::seed_from_u64(17);
    let round = start_round(source.words(), "en", &mut rng).unwrap();

    assert!(source.words().iter().any(|w| w == round.root_word()));
    assert!(round.used_words().is_empty());
    assert_eq!(round.score(), 0);
}

#[test]
fn empty_corpus_is_a_configuration_error() {
    let mut rng = StdRng::seed_from_u64(17);
    let source = WordSource::new(Vec::new());
    let err = start_round(source.words(), "en", &mut rng).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn seeded_games_repeat_root_words() {
    let play = |seed| {
        let mut game = Game::new(
            GameConfig::default().with_seed(Some(seed)),
            WordSource::embedded().into_words(),
            WordListDictionary::embedded(),
        )
        .unwrap();
        let mut roots = vec![game.round().root_word().to_string()];
        for _ in 0..5 {
            roots.push(game.reset().unwrap().root_word().to_string());
        }
        roots
    };

    assert_eq!(play(8), play(8));
}

#[test]
fn trait_objects_work_as_dictionaries() {
    let dictionary: Box<dyn DictionaryChecker> = Box::new(WordListDictionary::embedded());
    let (result, _) = silkworm().submit("worm", dictionary.as_ref());
    assert!(result.is_accepted());
}

#[test]
fn round_can_be_saved_and_resumed() {
    let dictionary = WordListDictionary::embedded();
    let (_, round) = silkworm().submit("silk", &dictionary);
    let (_, round) = round.submit("worm", &dictionary);

    let saved = serde_json::to_string(&round).unwrap();
    let resumed: Round = serde_json::from_str(&saved).unwrap();

    assert_eq!(resumed, round);
    assert_eq!(
        resumed.evaluate("silk", &dictionary).rejection(),
        Some(Rejection::AlreadyUsed)
    );
}

#[test]
fn tampered_saves_are_refused() {
    let save = |root: &str, used: &[&str], score: usize| {
        serde_json::json!({
            "root_word": root,
            "language": "en",
            "used_words": used,
            "score": score
        })
    };
    let tampered = [
        save("SILKWORM", &["silk", "silk", "zzzzzzzz"], 999),
        save("", &[], 0),
        save("silkworm", &["silk", "silk"], 8),
        save("silkworm", &["silk"], 5),
    ];

    for json in tampered {
        assert!(
            serde_json::from_value::<Round>(json.clone()).is_err(),
            "{json}"
        );
    }

    let honest = save("silkworm", &["worm", "silk"], 8);
    let round: Round = serde_json::from_value(honest).unwrap();
    assert_eq!(round.used_words(), ["worm", "silk"]);
}
