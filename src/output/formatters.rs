//! Formatting utilities for terminal output

use crate::core::Rejection;

/// Short headline for a rejection
#[must_use]
pub const fn rejection_title(reason: Rejection) -> &'static str {
    match reason {
        Rejection::TooShort => "Need more than 2 letters",
        Rejection::SameAsRoot => "Same word error",
        Rejection::AlreadyUsed => "Word used already",
        Rejection::NotSpellable => "Word not possible",
        Rejection::NotRecognized => "Word not recognized",
    }
}

/// Explanation shown under the title
#[must_use]
pub fn rejection_message(reason: Rejection, root_word: &str) -> String {
    match reason {
        Rejection::TooShort => "Type at least 3 letters".to_string(),
        Rejection::SameAsRoot => "You need to use different words".to_string(),
        Rejection::AlreadyUsed => "Be more original!".to_string(),
        Rejection::NotSpellable => format!("You can't spell that word from '{root_word}'"),
        Rejection::NotRecognized => "You can't just make them up, you know!".to_string(),
    }
}

/// Circled number for a word length: ① to ⑳, then plain parentheses
#[must_use]
pub fn length_badge(length: usize) -> String {
    match length {
        // U+2460 CIRCLED DIGIT ONE .. U+2473 CIRCLED NUMBER TWENTY
        1..=20 => char::from_u32(0x2460 + length as u32 - 1)
            .map_or_else(|| format!("({length})"), String::from),
        _ => format!("({length})"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
