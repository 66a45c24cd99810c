//! Game orchestration
//!
//! Drives one game end to end: pick a guess, submit it to the judge, fold
//! the feedback into the candidate state, repeat until the answer is found
//! or the turn budget runs out. The loop itself is sequential; all
//! parallelism lives inside the selector.

use super::candidates::{CandidateState, InconsistentOracle};
use super::config::SolverConfig;
use super::selector::Selector;
use crate::core::{Pattern, Word};
use crate::oracle::{Oracle, OracleError};
use crate::wordlists::Lexicon;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// How a finished game ended
///
/// Losing on the turn limit is a normal result, not an error; errors are
/// reserved for a judge that misbehaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Guessed the answer within the turn budget
    Win { turns: usize },
    /// Ran out of turns
    Loss,
}

/// One completed turn
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub guess: Word,
    pub pattern: Pattern,
    /// Candidates remaining after folding in the feedback
    pub remaining: usize,
    /// Wall-clock time for selection plus the judge round-trip
    pub duration: Duration,
    /// Entropy of the guess, when an entropy scan chose it
    pub entropy: Option<f64>,
}

/// Full record of a finished game
#[derive(Debug, Clone)]
pub struct Report {
    pub outcome: Outcome,
    pub turns: Vec<TurnRecord>,
}

impl Report {
    /// Whether the game was won
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self.outcome, Outcome::Win { .. })
    }

    /// The (guess, pattern) pairs in turn order
    pub fn history(&self) -> impl Iterator<Item = (Word, Pattern)> + '_ {
        self.turns.iter().map(|turn| (turn.guess, turn.pattern))
    }
}

/// Error type for failed games
#[derive(Debug)]
pub enum SolverError {
    /// A guess fell outside the allowed list (e.g. a misconfigured opener)
    InvalidWord(Word),
    /// The judge failed to produce feedback
    Oracle(OracleError),
    /// The judge's feedback contradicts itself
    InconsistentOracle(InconsistentOracle),
    /// The selection worker pool could not be spawned
    WorkerPool(rayon::ThreadPoolBuildError),
    /// The game was cancelled from outside
    Cancelled,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(word) => {
                write!(f, "Guess {word} is not in the allowed-guess list")
            }
            Self::Oracle(source) => write!(f, "{source}"),
            Self::InconsistentOracle(source) => write!(f, "{source}"),
            Self::WorkerPool(source) => write!(f, "Failed to start worker pool: {source}"),
            Self::Cancelled => write!(f, "Game cancelled"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Oracle(source) => Some(source),
            Self::InconsistentOracle(source) => Some(source),
            Self::WorkerPool(source) => Some(source),
            _ => None,
        }
    }
}

impl From<OracleError> for SolverError {
    fn from(source: OracleError) -> Self {
        Self::Oracle(source)
    }
}

impl From<InconsistentOracle> for SolverError {
    fn from(source: InconsistentOracle) -> Self {
        Self::InconsistentOracle(source)
    }
}

impl From<rayon::ThreadPoolBuildError> for SolverError {
    fn from(source: rayon::ThreadPoolBuildError) -> Self {
        Self::WorkerPool(source)
    }
}

/// Plays games against a judge
///
/// Holds the immutable word lists by reference and a configured selector;
/// one orchestrator can play any number of games.
pub struct Orchestrator<'a> {
    lexicon: &'a Lexicon,
    selector: Selector,
    max_turns: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator for the given word lists and configuration
    ///
    /// # Errors
    /// Returns `SolverError::InvalidWord` if the configured opener is not an
    /// allowed guess, or `SolverError::WorkerPool` if the worker pool cannot
    /// be spawned.
    pub fn new(lexicon: &'a Lexicon, config: &SolverConfig) -> Result<Self, SolverError> {
        if let Some(opener) = config.opener
            && !lexicon.is_allowed(&opener)
        {
            return Err(SolverError::InvalidWord(opener));
        }

        Ok(Self {
            lexicon,
            selector: Selector::from_config(config)?,
            max_turns: config.max_turns.max(1),
            cancel: None,
        })
    }

    /// Attach a cancellation flag, honored at turn boundaries
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Play one game against the judge
    ///
    /// # Errors
    /// Returns `SolverError` if the judge fails or contradicts itself, or if
    /// the game is cancelled. Running out of turns is the `Loss` outcome,
    /// not an error.
    pub fn run<O: Oracle>(&self, oracle: &mut O) -> Result<Report, SolverError> {
        let mut state = CandidateState::new(self.lexicon.answers());
        let mut turns = Vec::with_capacity(self.max_turns);

        for _ in 0..self.max_turns {
            if let Some(cancel) = &self.cancel
                && cancel.load(Ordering::Relaxed)
            {
                return Err(SolverError::Cancelled);
            }

            let started = Instant::now();
            let choice = self.selector.choose(self.lexicon, &state);
            if !self.lexicon.is_allowed(&choice.word) {
                return Err(SolverError::InvalidWord(choice.word));
            }

            let pattern = oracle.submit(&choice.word)?;

            if pattern.is_perfect() {
                turns.push(TurnRecord {
                    guess: choice.word,
                    pattern,
                    remaining: 1,
                    duration: started.elapsed(),
                    entropy: choice.entropy(),
                });
                return Ok(Report {
                    outcome: Outcome::Win { turns: turns.len() },
                    turns,
                });
            }

            state = state.filter(&choice.word, pattern)?;
            turns.push(TurnRecord {
                guess: choice.word,
                pattern,
                remaining: state.len(),
                duration: started.elapsed(),
                entropy: choice.entropy(),
            });
        }

        Ok(Report {
            outcome: Outcome::Loss,
            turns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::Simulator;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn crane_family_lexicon() -> Lexicon {
        Lexicon::new(
            words(&["salet", "crane", "crate", "crave", "craze", "grade"]),
            words(&["crane", "crate", "crave", "craze", "grade"]),
        )
        .unwrap()
    }

    /// A judge that answers every guess with the same pattern
    struct StuckJudge(Pattern);

    impl Oracle for StuckJudge {
        fn submit(&mut self, _guess: &Word) -> Result<Pattern, OracleError> {
            Ok(self.0)
        }
    }

    #[test]
    fn wins_crane_within_four_turns() {
        let lexicon = crane_family_lexicon();
        let orchestrator = Orchestrator::new(&lexicon, &SolverConfig::default()).unwrap();
        let mut judge = Simulator::new(Word::new("crane").unwrap());

        let report = orchestrator.run(&mut judge).unwrap();

        assert!(report.is_win());
        assert!(report.turns.len() <= 4);
        assert_eq!(report.turns[0].guess, Word::new("salet").unwrap());
        let (last_guess, last_pattern) = report.history().last().unwrap();
        assert_eq!(last_guess, judge.answer());
        assert!(last_pattern.is_perfect());
    }

    #[test]
    fn wins_every_answer_in_the_family() {
        let lexicon = crane_family_lexicon();
        let orchestrator = Orchestrator::new(&lexicon, &SolverConfig::default()).unwrap();

        for &answer in lexicon.answers() {
            let mut judge = Simulator::new(answer);
            let report = orchestrator.run(&mut judge).unwrap();

            assert!(report.is_win(), "failed to find {answer}");
            match report.outcome {
                Outcome::Win { turns } => assert_eq!(turns, report.turns.len()),
                Outcome::Loss => unreachable!(),
            }
        }
    }

    #[test]
    fn candidates_shrink_every_turn() {
        let lexicon = crane_family_lexicon();
        let orchestrator = Orchestrator::new(&lexicon, &SolverConfig::default()).unwrap();
        let mut judge = Simulator::new(Word::new("grade").unwrap());

        let report = orchestrator.run(&mut judge).unwrap();

        let mut previous = lexicon.answers().len();
        for turn in &report.turns {
            assert!(turn.remaining <= previous);
            previous = turn.remaining;
        }
    }

    #[test]
    fn turn_limit_is_a_loss_not_an_error() {
        let lexicon = crane_family_lexicon();
        let config = SolverConfig {
            max_turns: 1,
            ..SolverConfig::default()
        };
        let orchestrator = Orchestrator::new(&lexicon, &config).unwrap();

        // The opener cannot be the answer, so one turn is never enough
        let mut judge = Simulator::new(Word::new("crane").unwrap());
        let report = orchestrator.run(&mut judge).unwrap();

        assert_eq!(report.outcome, Outcome::Loss);
        assert_eq!(report.turns.len(), 1);
    }

    #[test]
    fn contradictory_judge_is_reported() {
        let lexicon = crane_family_lexicon();
        let orchestrator = Orchestrator::new(&lexicon, &SolverConfig::default()).unwrap();

        // All-absent feedback for SALET contradicts every candidate (each
        // contains an A or an E)
        let mut judge = StuckJudge(Pattern::parse("AAAAA").unwrap());
        let result = orchestrator.run(&mut judge);

        assert!(matches!(result, Err(SolverError::InconsistentOracle(_))));
    }

    #[test]
    fn unknown_opener_is_rejected_up_front() {
        let lexicon = crane_family_lexicon();
        let config = SolverConfig {
            opener: Some(Word::new("zzzzz").unwrap()),
            ..SolverConfig::default()
        };

        let result = Orchestrator::new(&lexicon, &config);
        assert!(matches!(result, Err(SolverError::InvalidWord(_))));
    }

    #[test]
    fn cancellation_is_honored_at_turn_boundaries() {
        let lexicon = crane_family_lexicon();
        let flag = Arc::new(AtomicBool::new(true));
        let orchestrator = Orchestrator::new(&lexicon, &SolverConfig::default())
            .unwrap()
            .with_cancel_flag(Arc::clone(&flag));

        let mut judge = Simulator::new(Word::new("crane").unwrap());
        let result = orchestrator.run(&mut judge);

        assert!(matches!(result, Err(SolverError::Cancelled)));
    }

    #[test]
    fn disabled_opener_still_wins() {
        let lexicon = crane_family_lexicon();
        let config = SolverConfig {
            opener: None,
            ..SolverConfig::default()
        };
        let orchestrator = Orchestrator::new(&lexicon, &config).unwrap();
        let mut judge = Simulator::new(Word::new("craze").unwrap());

        let report = orchestrator.run(&mut judge).unwrap();
        assert!(report.is_win());
    }
}
