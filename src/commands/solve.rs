//! Solve command
//!
//! Plays one full game against the in-process judge for a known target and
//! returns the game report.

use crate::core::Word;
use crate::oracle::Simulator;
use crate::solver::{Orchestrator, Report, SolverConfig};
use crate::wordlists::Lexicon;
use anyhow::{Context, Result, bail};

/// Solve a specific target word
///
/// # Errors
/// Returns an error if the target is not a valid answer word or the game
/// itself fails (see [`crate::solver::SolverError`]).
pub fn solve_word(target: &str, lexicon: &Lexicon, config: &SolverConfig) -> Result<Report> {
    let target = Word::new(target).context("Invalid target word")?;

    if !lexicon.answers().contains(&target) {
        bail!("Target {target} is not in the answer list");
    }

    let orchestrator = Orchestrator::new(lexicon, config)?;
    let mut judge = Simulator::new(target);
    let report = orchestrator.run(&mut judge)?;
    Ok(report)
}
