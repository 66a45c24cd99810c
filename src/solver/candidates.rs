//! Candidate answer tracking
//!
//! The set of answers still consistent with every piece of feedback received
//! so far. Starts as the full answer set and only ever shrinks; a truthful
//! judge can never empty it, so an empty filter result means the judge is
//! not playing by the rules.

use crate::core::{Pattern, Word};
use std::fmt;

/// The answers still consistent with all observed feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateState {
    words: Vec<Word>,
}

/// Error raised when feedback rules out every remaining candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InconsistentOracle {
    pub guess: Word,
    pub pattern: Pattern,
}

impl fmt::Display for InconsistentOracle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Feedback {} for guess {} rules out every candidate",
            self.pattern, self.guess
        )
    }
}

impl std::error::Error for InconsistentOracle {}

impl CandidateState {
    /// Start a game with the full answer set as candidates
    #[must_use]
    pub fn new(answers: &[Word]) -> Self {
        Self {
            words: answers.to_vec(),
        }
    }

    /// Retain the candidates that would have produced `observed` for `guess`
    ///
    /// # Errors
    /// Returns [`InconsistentOracle`] if no candidate survives, which can
    /// only happen when the judge's feedback contradicts itself (or the
    /// hidden answer is outside the answer set).
    pub fn filter(
        &self,
        guess: &Word,
        observed: Pattern,
    ) -> Result<Self, InconsistentOracle> {
        let words: Vec<Word> = self
            .words
            .iter()
            .filter(|candidate| Pattern::calculate(guess, candidate) == observed)
            .copied()
            .collect();

        if words.is_empty() {
            return Err(InconsistentOracle {
                guess: *guess,
                pattern: observed,
            });
        }

        Ok(Self { words })
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// A filtered state always holds at least one word; this exists for the
    /// conventional `len`/`is_empty` pairing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The remaining candidates, in answer-set order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Check whether a word is still a candidate
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// The alphabetically smallest remaining candidate
    ///
    /// # Panics
    /// Panics if the state is empty, which `new` and `filter` never produce.
    #[must_use]
    pub fn first_alphabetical(&self) -> Word {
        *self
            .words
            .iter()
            .min()
            .expect("candidate state is never empty")
    }
}
