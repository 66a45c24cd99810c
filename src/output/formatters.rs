//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use colored::Colorize;

/// Render a guess with its feedback colors
///
/// Exact letters come out green, present letters yellow, absent letters dim.
#[must_use]
pub fn colorize_guess(word: &Word, pattern: Pattern) -> String {
    let mut result = String::new();

    for (position, symbol) in pattern.decode().into_iter().enumerate() {
        let letter = char::from(word.letter_at(position)).to_string();
        let painted = match symbol {
            Feedback::Exact => letter.bright_green().bold(),
            Feedback::Present => letter.yellow().bold(),
            Feedback::Absent => letter.bright_black(),
        };
        result.push_str(&painted.to_string());
    }

    result
}

/// Format a pattern as an emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern
        .decode()
        .into_iter()
        .map(|symbol| match symbol {
            Feedback::Exact => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬜',
        })
        .collect()
}
