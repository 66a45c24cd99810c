//! Solver configuration
//!
//! The handful of knobs a game exposes, with the defaults the solver is
//! tuned for.

use crate::core::Word;
use std::time::Duration;

/// Precomputed first guess
///
/// SALET is played on turn one without evaluating the full guess pool; it
/// scores about 5.8 bits against the standard answer set and skips the most
/// expensive scan of the game. Configurable via [`SolverConfig::opener`].
pub const DEFAULT_OPENER: Word = Word::from_upper_bytes(*b"SALET");

/// Per-game solver settings
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum guesses before the game is lost
    pub max_turns: usize,
    /// Wall-clock budget for one guess selection
    pub time_budget: Duration,
    /// Worker threads for the selection scan; `None` uses one per core
    pub max_workers: Option<usize>,
    /// First guess to play without scanning; `None` scans on turn one too
    pub opener: Option<Word>,
    /// Scan only the remaining candidates once their count drops to this
    pub pool_threshold: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_turns: 6,
            time_budget: Duration::from_secs_f64(5.0),
            max_workers: None,
            opener: Some(DEFAULT_OPENER),
            pool_threshold: 2,
        }
    }
}
