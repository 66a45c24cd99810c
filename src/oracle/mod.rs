//! The judge seam
//!
//! The solver core is blind: it only ever sees feedback patterns coming back
//! from a judge it cannot inspect. [`Oracle`] is the single capability it
//! consumes. Transport concerns (retries, backoff, wire formats) belong
//! inside an adapter and never leak past [`OracleError`].

mod console;
mod simulator;

pub use console::ConsoleOracle;
pub use simulator::Simulator;

use crate::core::{Pattern, Word};
use std::fmt;

/// A judge that scores guesses
pub trait Oracle {
    /// Submit a guess and receive the per-position feedback pattern
    ///
    /// Re-submitting the same guess within one game must yield the same
    /// pattern.
    ///
    /// # Errors
    /// Returns `OracleError` when the judge cannot produce feedback.
    fn submit(&mut self, guess: &Word) -> Result<Pattern, OracleError>;
}

/// Error type for judge failures
#[derive(Debug)]
pub enum OracleError {
    /// The judge could not be reached or answered garbage, even after any
    /// adapter-internal retries
    Transport(String),
    /// The judge answered, but not with a readable feedback pattern
    MalformedFeedback(String),
    /// The judge hung up (e.g. end of input on an interactive session)
    Closed,
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(detail) => write!(f, "Judge transport failed: {detail}"),
            Self::MalformedFeedback(text) => {
                write!(f, "Judge returned unreadable feedback: {text:?}")
            }
            Self::Closed => write!(f, "Judge connection closed"),
        }
    }
}

impl std::error::Error for OracleError {}
