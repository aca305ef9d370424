//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge, rejection_message, rejection_title};
use crate::commands::{CheckResult, RootAnalysis};
use crate::core::SubmissionResult;
use colored::Colorize;

/// Print the result of checking a single word
pub fn print_check_result(check: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}   Word: {}",
        check.root.to_uppercase().bright_yellow().bold(),
        check.word.to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &check.result {
        SubmissionResult::Accepted { word, score_delta } => {
            println!(
                "\n{}",
                format!("✅ '{word}' is accepted, worth {score_delta} points")
                    .green()
                    .bold()
            );
        }
        SubmissionResult::Rejected { reason } => {
            let title = format!("❌ {}", rejection_title(*reason));
            println!("\n{}", title.red().bold());
            println!("   {}", rejection_message(*reason, &check.root));
        }
    }
}

/// Print the words achievable from a root word
///
/// With `all`, every word is listed; otherwise only the longest few.
pub fn print_analysis_result(analysis: &RootAnalysis, all: bool) {
    const PREVIEW: usize = 10;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT WORD ANALYSIS:".bright_cyan().bold(),
        analysis.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Achievable words: {}", analysis.word_count());
    println!(
        "   Max score:        {}",
        analysis.max_score.to_string().bright_yellow()
    );
    if let Some(longest) = analysis.longest() {
        println!("   Longest word:     {}", longest.to_uppercase().green());
    }

    if analysis.words.is_empty() {
        println!("\n{}", "No words can be made from this root!".red().bold());
        return;
    }

    println!("\n📈 {}", "Words by length:".bright_cyan().bold());
    let longest_len = analysis
        .words
        .iter()
        .map(|w| crate::core::letter_count(w))
        .max()
        .unwrap_or(0);
    for len in (crate::core::MIN_WORD_LENGTH..=longest_len).rev() {
        let count = analysis
            .words
            .iter()
            .filter(|w| crate::core::letter_count(w) == len)
            .count();
        if count > 0 {
            let bar = create_progress_bar(count as f64, analysis.word_count() as f64, 40);
            println!("   {} {} {count:4}", length_badge(len), bar.green());
        }
    }

    let shown = if all { analysis.words.len() } else { PREVIEW };
    println!("\n📝 {}", "Words:".bright_cyan().bold());
    for word in analysis.words.iter().take(shown) {
        let badge = length_badge(crate::core::letter_count(word));
        println!("   {badge} {word}");
    }
    if analysis.words.len() > shown {
        println!(
            "   {}",
            format!("... and {} more (use --all)", analysis.words.len() - shown).bright_black()
        );
    }
}
