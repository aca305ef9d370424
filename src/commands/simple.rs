//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::SubmissionResult;
use crate::dictionary::DictionaryChecker;
use crate::game::Game;
use crate::output::formatters::{length_badge, rejection_message, rejection_title};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output, or if a new
/// round cannot be started.
pub fn run_simple<D: DictionaryChecker>(game: &mut Game<D>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(game, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the game loop over arbitrary input and output
///
/// Ends on `/quit` or at end of input. Other lines starting with `/` are commands;
/// anything else is submitted as a word.
///
/// # Errors
///
/// Returns an error on I/O failure or if a new round cannot be started.
pub fn run_simple_with<D, R, W>(game: &mut Game<D>, input: &mut R, out: &mut W) -> Result<()>
where
    D: DictionaryChecker,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Scramble - Simple Mode                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Make as many words as you can from the root word.")?;
    writeln!(out, "Words need at least three letters and score one point per letter.\n")?;
    writeln!(
        out,
        "Commands: '/quit' to exit, '/new' for a new root word, '/words' to list your words\n"
    )?;

    print_round_header(game, out)?;

    loop {
        let Some(line) = read_line(input, out, "Word")? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "/quit" | "/q" | "/exit" => {
                let score = game.round().score();
                writeln!(out, "\n👋 Thanks for playing! Final score: {score}\n")?;
                return Ok(());
            }
            "/new" | "/n" => {
                game.reset()?;
                writeln!(out, "\n🔄 New round started!\n")?;
                print_round_header(game, out)?;
            }
            "/words" | "/w" => print_used_words(game, out)?,
            _ => match game.submit(&line) {
                SubmissionResult::Accepted { word, score_delta } => {
                    writeln!(
                        out,
                        "✅ {} {} (+{score_delta}) | Score: {}\n",
                        length_badge(score_delta),
                        word.bright_white().bold(),
                        game.round().score()
                    )?;
                }
                SubmissionResult::Rejected { reason } => {
                    writeln!(
                        out,
                        "❌ {}: {}\n",
                        rejection_title(reason).red().bold(),
                        rejection_message(reason, game.round().root_word())
                    )?;
                }
            },
        }
    }
}

fn print_round_header<D, W>(game: &Game<D>, out: &mut W) -> io::Result<()>
where
    D: DictionaryChecker,
    W: Write,
{
    let root = game.round().root_word().to_uppercase();
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(out, "Root word: {}", root.bright_yellow().bold())?;
    writeln!(out, "────────────────────────────────────────────────────────────\n")
}

fn print_used_words<D, W>(game: &Game<D>, out: &mut W) -> io::Result<()>
where
    D: DictionaryChecker,
    W: Write,
{
    let round = game.round();
    if round.used_words().is_empty() {
        return writeln!(out, "No words yet!\n");
    }

    writeln!(out, "Your words:")?;
    for word in round.used_words() {
        let badge = length_badge(crate::core::letter_count(word));
        writeln!(out, "  {badge} {word}")?;
    }
    writeln!(out, "Score: {}\n", round.score())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rejection;
    use crate::dictionary::WordListDictionary;
    use crate::game::GameConfig;

    fn setup_game() -> Game<WordListDictionary> {
        Game::new(
            GameConfig::default().with_seed(Some(11)),
            vec!["silkworm".to_string()],
            WordListDictionary::new("en", ["silk", "worm"]),
        )
        .unwrap()
    }

    fn play(game: &mut Game<WordListDictionary>, script: &str) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        run_simple_with(game, &mut script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn plays_a_round() {
        let mut game = setup_game();
        let output = play(&mut game, "silk\nSILK\nox\n/quit\n");

        assert!(output.contains("Root word: SILKWORM"));
        assert!(output.contains("(+4) | Score: 4"));
        assert!(output.contains("Word used already"));
        assert!(output.contains("Need more than 2 letters"));
        assert!(output.contains("Final score: 4"));

        assert_eq!(game.round().used_words(), ["silk"]);
        assert_eq!(game.stats().rejections(Rejection::AlreadyUsed), 1);
    }

    #[test]
    fn new_command_resets_round() {
        let mut game = setup_game();
        let output = play(&mut game, "worm\n/new\n");

        assert!(output.contains("New round started"));
        assert_eq!(game.round().score(), 0);
        assert_eq!(game.stats().rounds_played, 1);
        assert_eq!(game.stats().best_score, 4);
    }

    #[test]
    fn words_command_lists_used_words() {
        let mut game = setup_game();
        let output = play(&mut game, "/words\nsilk\nworm\n/words\n");

        assert!(output.contains("No words yet!"));
        assert!(output.contains("Your words:"));
        assert!(output.contains("④ worm"));
        assert!(output.contains("Score: 8"));
    }

    #[test]
    fn end_of_input_ends_game() {
        let mut game = setup_game();
        let output = play(&mut game, "");
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn rejection_message_names_root() {
        let mut game = setup_game();
        let output = play(&mut game, "silkworms\n/q\n");
        assert!(output.contains("Word not possible"));
        assert!(output.contains("'silkworm'"));
    }
}
