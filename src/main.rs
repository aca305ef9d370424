//! Scramble - CLI
//!
//! Word scramble game with TUI and CLI modes, plus tools for analyzing root words.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use scramble::{
    commands::{analyze_root, check_word, print_survey_statistics, run_simple, run_survey},
    core::DEFAULT_LANGUAGE,
    dictionary::WordListDictionary,
    game::{Game, GameConfig},
    output::{print_analysis_result, print_check_result},
    wordlists::WordSource,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "scramble",
    about = "Make as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'all' (default, embedded list) or path to a newline-separated file
    #[arg(short = 's', long, global = true, default_value = "all")]
    start_words: String,

    /// Dictionary: 'all' (default, embedded English list) or path to a newline-separated file
    #[arg(short = 'd', long, global = true, default_value = "all")]
    dictionary: String,

    /// Language tag words are checked against
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for root word selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Check whether a word would be accepted for a root word
    Check {
        /// The root word
        root: String,

        /// The word to check
        word: String,
    },

    /// List every word that can be made from a root word
    Analyze {
        /// The root word
        root: String,

        /// List all words instead of the longest few
        #[arg(short, long)]
        all: bool,
    },

    /// Analyze every root word in the corpus
    Survey {
        /// Limit number of root words to analyze
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Initialize logging on stderr
///
/// Quiet by default so log lines don't tear the TUI; `--verbose` enables debug output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the root word corpus based on the -s flag
fn load_start_words(mode: &str) -> Result<WordSource> {
    match mode {
        "all" => Ok(WordSource::embedded()),
        path => WordSource::from_file(path)
            .with_context(|| format!("loading root words from {path}")),
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(mode: &str, language: &str) -> Result<WordListDictionary> {
    match mode {
        "all" if language.eq_ignore_ascii_case(DEFAULT_LANGUAGE) => {
            Ok(WordListDictionary::embedded())
        }
        "all" => bail!("the embedded dictionary is English; pass --dictionary for '{language}'"),
        path => WordListDictionary::from_file(path, language)
            .with_context(|| format!("loading dictionary from {path}")),
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose);

    let dictionary = load_dictionary(&cli.dictionary, &cli.language)?;
    tracing::debug!(
        words = dictionary.len(),
        language = dictionary.language(),
        "dictionary loaded"
    );

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let game = new_game(&cli, dictionary)?;
            run_play_command(game)
        }
        Commands::Simple => {
            let mut game = new_game(&cli, dictionary)?;
            run_simple(&mut game)
        }
        Commands::Check { root, word } => {
            run_check_command(&root, &word, &cli.language, &dictionary)
        }
        Commands::Analyze { root, all } => run_analyze_command(&root, all, &dictionary),
        Commands::Survey { limit } => {
            let start_words = load_start_words(&cli.start_words)?;
            run_survey_command(&start_words, &dictionary, limit);
            Ok(())
        }
    }
}

fn new_game(cli: &Cli, dictionary: WordListDictionary) -> Result<Game<WordListDictionary>> {
    let start_words = load_start_words(&cli.start_words)?;
    let config = GameConfig::default()
        .with_seed(cli.seed)
        .with_language(cli.language.clone());

    Game::new(config, start_words.into_words(), dictionary).context("starting a round")
}

fn run_check_command(
    root: &str,
    word: &str,
    language: &str,
    dictionary: &WordListDictionary,
) -> Result<()> {
    let check = check_word(root, word, language, dictionary)?;
    print_check_result(&check);
    Ok(())
}

fn run_analyze_command(root: &str, all: bool, dictionary: &WordListDictionary) -> Result<()> {
    let analysis = analyze_root(root, dictionary)?;
    print_analysis_result(&analysis, all);
    Ok(())
}

fn run_survey_command(
    start_words: &WordSource,
    dictionary: &WordListDictionary,
    limit: Option<usize>,
) {
    println!("\n{}", "═".repeat(70));
    println!(" Root Word Survey ");
    println!("{}", "═".repeat(70));
    println!("\nDictionary: {} words", dictionary.len());
    println!();

    let stats = run_survey(start_words.words(), dictionary, limit);
    print_survey_statistics(&stats);
}

fn run_play_command(game: Game<WordListDictionary>) -> Result<()> {
    use scramble::interactive::{App, run_tui};

    run_tui(App::new(game))
}
