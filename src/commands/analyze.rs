//! Analyze command
//!
//! Scores a single word against the full answer set without playing a game.

use crate::core::Word;
use crate::solver::{GuessMetrics, metrics};
use crate::wordlists::Lexicon;
use anyhow::{Context, Result, bail};

/// Entropy analysis of one word
#[derive(Debug, Clone, Copy)]
pub struct Analysis {
    pub word: Word,
    /// Size of the answer set the word was scored against
    pub candidates: usize,
    pub metrics: GuessMetrics,
}

/// Analyze how well a word would open against the answer set
///
/// # Errors
/// Returns an error if the word is malformed or not an allowed guess.
pub fn analyze_word(word: &str, lexicon: &Lexicon) -> Result<Analysis> {
    let word = Word::new(word).context("Invalid word")?;

    if !lexicon.is_allowed(&word) {
        bail!("{word} is not in the allowed-guess list");
    }

    Ok(Analysis {
        word,
        candidates: lexicon.answers().len(),
        metrics: metrics(&word, lexicon.answers()),
    })
}
