//! Wordle Bot
//!
//! An autonomous Wordle solver. Each turn it picks the guess with the
//! highest expected information gain over the remaining candidates, submits
//! it to a judge it cannot see into, and folds the feedback back into its
//! candidate set until the answer falls out.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_bot::core::Word;
//! use wordle_bot::oracle::Simulator;
//! use wordle_bot::solver::{Orchestrator, SolverConfig};
//! use wordle_bot::wordlists::Lexicon;
//!
//! let lexicon = Lexicon::load("data/allowed.txt", "data/answers.txt").unwrap();
//! let orchestrator = Orchestrator::new(&lexicon, &SolverConfig::default()).unwrap();
//!
//! let mut judge = Simulator::new(Word::new("crane").unwrap());
//! let report = orchestrator.run(&mut judge).unwrap();
//! assert!(report.is_win());
//! ```

// Core domain types
pub mod core;

// Solving engine
pub mod solver;

// Judge adapters
pub mod oracle;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
