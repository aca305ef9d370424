//! Survey the root word corpus
//!
//! Analyzes every root word (or a limited subset) and reports how playable each one is.

use super::analyze::{RootAnalysis, analyze_root};
use crate::dictionary::WordListDictionary;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::warn;

/// How many of the richest and poorest roots to keep
const RANKED_ROOTS: usize = 5;

/// Statistics from surveying root words
#[derive(Debug)]
pub struct SurveyStatistics {
    pub roots_tested: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub average_max_score: f64,
    /// Roots with the most achievable words, best first
    pub richest: Vec<(String, usize)>,
    /// Roots with the fewest achievable words, worst first
    pub poorest: Vec<(String, usize)>,
    /// Roots where no word at all can be found
    pub unplayable: Vec<String>,
    pub total_time: Duration,
}

/// Analyze the root words in `roots`, up to `limit` of them
///
/// Blank roots are skipped with a warning.
#[must_use]
pub fn run_survey(
    roots: &[String],
    dictionary: &WordListDictionary,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<&String> = roots.iter().take(limit.unwrap_or(roots.len())).collect();

    println!("🔍 Surveying {} root words...", roots.len());

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut analyses: Vec<RootAnalysis> = Vec::with_capacity(roots.len());

    for root in roots {
        match analyze_root(root, dictionary) {
            Ok(analysis) => {
                pb.set_message(format!("{}: {}", analysis.root, analysis.word_count()));
                analyses.push(analysis);
            }
            Err(err) => warn!(root = root.as_str(), %err, "skipping root word"),
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    summarize(&analyses, start.elapsed())
}

/// Reduce per-root analyses into survey statistics
#[must_use]
pub fn summarize(analyses: &[RootAnalysis], total_time: Duration) -> SurveyStatistics {
    let roots_tested = analyses.len();
    let total_words: usize = analyses.iter().map(RootAnalysis::word_count).sum();
    let total_max_score: usize = analyses.iter().map(|a| a.max_score).sum();

    let mut ranked: Vec<(String, usize)> = analyses
        .iter()
        .map(|a| (a.root.clone(), a.word_count()))
        .collect();
    ranked.sort_by(|(root_a, count_a), (root_b, count_b)| {
        count_b.cmp(count_a).then_with(|| root_a.cmp(root_b))
    });

    let richest = ranked.iter().take(RANKED_ROOTS).cloned().collect();
    let poorest = ranked.iter().rev().take(RANKED_ROOTS).cloned().collect();
    let unplayable = ranked
        .iter()
        .filter(|(_, count)| *count == 0)
        .map(|(root, _)| root.clone())
        .collect();

    let (average_words, average_max_score) = if roots_tested > 0 {
        (
            total_words as f64 / roots_tested as f64,
            total_max_score as f64 / roots_tested as f64,
        )
    } else {
        (0.0, 0.0)
    };

    SurveyStatistics {
        roots_tested,
        total_words,
        average_words,
        average_max_score,
        richest,
        poorest,
        unplayable,
        total_time,
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Survey Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Corpus".bright_cyan().bold());
    println!("  Root words tested:   {}", stats.roots_tested);
    println!("  Achievable words:    {}", stats.total_words);
    println!(
        "  Average per root:    {}",
        format!("{:.1}", stats.average_words).bright_yellow().bold()
    );
    println!("  Average max score:   {:.1}", stats.average_max_score);
    let seconds = stats.total_time.as_secs_f64();
    println!("  Time taken:          {seconds:.2}s");

    if !stats.richest.is_empty() {
        println!("\n✨ {}", "Richest Roots".green().bold());
        for (root, count) in &stats.richest {
            println!("  {} ({count} words)", root.to_uppercase().green());
        }
    }

    if !stats.poorest.is_empty() {
        println!("\n😰 {}", "Poorest Roots".yellow().bold());
        for (root, count) in &stats.poorest {
            println!("  {} ({count} words)", root.to_uppercase().yellow());
        }
    }

    if !stats.unplayable.is_empty() {
        println!("\n❌ {}", "Unplayable Roots".red().bold());
        for root in &stats.unplayable {
            println!("  {}", root.to_uppercase().red());
        }
    }
}
