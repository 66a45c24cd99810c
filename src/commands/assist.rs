//! Assist command
//!
//! Plays an external game the solver cannot reach directly: every guess is
//! printed for the operator to relay, and the judge's feedback is typed back
//! in as an E/P/A line.

use crate::oracle::ConsoleOracle;
use crate::solver::{Orchestrator, Report, SolverConfig};
use crate::wordlists::Lexicon;
use anyhow::Result;
use colored::Colorize;

/// Drive an external game through the terminal
///
/// # Errors
/// Returns an error if the game fails, including feedback that contradicts
/// itself (usually a typo in a relayed pattern).
pub fn run_assist(lexicon: &Lexicon, config: &SolverConfig) -> Result<Report> {
    println!("\n{}", "Relay mode".bright_cyan().bold());
    println!("Play each suggested guess in your game, then type the feedback:");
    println!("  E = green (correct position)");
    println!("  P = yellow (wrong position)");
    println!("  A = gray (not in the word)");
    println!("Example: APAEP. Type 'win' when the game shows all greens.");

    let orchestrator = Orchestrator::new(lexicon, config)?;
    let mut judge = ConsoleOracle::stdio();
    let report = orchestrator.run(&mut judge)?;
    Ok(report)
}
