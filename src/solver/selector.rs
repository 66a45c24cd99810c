//! Guess selection
//!
//! Picks the next guess by maximizing expected information gain over the
//! remaining candidates, under a wall-clock budget. The scan fans the guess
//! pool out across worker threads; each worker keeps a local best and checks
//! a shared monotonic deadline before scoring the next guess, so an expiring
//! budget returns the best guess found so far instead of aborting work
//! mid-evaluation.

use super::candidates::CandidateState;
use super::config::SolverConfig;
use super::entropy::entropy;
use crate::core::Word;
use crate::wordlists::Lexicon;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// A selected guess together with how it was arrived at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    pub word: Word,
    pub origin: ChoiceOrigin,
}

/// How the selector settled on a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChoiceOrigin {
    /// Precomputed first guess, played while nothing has been learned yet
    Opener,
    /// Only one candidate left; guessing it either wins or exposes a lying
    /// judge
    SoleCandidate,
    /// Two candidates left; the alphabetically smaller one wins within two
    /// further turns either way
    SmallestOfPair,
    /// Entropy scan over the guess pool
    Scan { entropy: f64, evaluated: usize },
    /// The budget expired before any guess was scored; degraded to the
    /// alphabetically smallest candidate
    DeadlineFallback,
}

impl Choice {
    /// The entropy of the chosen guess, when a scan produced one
    #[must_use]
    pub const fn entropy(&self) -> Option<f64> {
        match self.origin {
            ChoiceOrigin::Scan { entropy, .. } => Some(entropy),
            _ => None,
        }
    }
}

/// Entropy-maximizing guess selector
pub struct Selector {
    time_budget: Duration,
    pool_threshold: usize,
    opener: Option<Word>,
    workers: Option<rayon::ThreadPool>,
}

impl Selector {
    /// Build a selector from the solver configuration
    ///
    /// # Errors
    /// Returns the underlying rayon error if a dedicated worker pool was
    /// requested but could not be spawned.
    pub fn from_config(config: &SolverConfig) -> Result<Self, rayon::ThreadPoolBuildError> {
        let workers = match config.max_workers {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads.max(1))
                    .build()?,
            ),
            None => None,
        };

        Ok(Self {
            time_budget: config.time_budget,
            pool_threshold: config.pool_threshold,
            opener: config.opener,
            workers,
        })
    }

    /// Select the next guess for the current candidate state
    ///
    /// Shortcut order: the opener while nothing has been learned, then the
    /// one- and two-candidate endgames, then the budgeted entropy scan. The
    /// scan pool is the full allowed list until the candidate count drops to
    /// the pool threshold, because probing words that cannot be the answer
    /// often split the candidates better than any candidate does.
    #[must_use]
    pub fn choose(&self, lexicon: &Lexicon, state: &CandidateState) -> Choice {
        if state.len() == lexicon.answers().len()
            && let Some(opener) = self.opener
        {
            return Choice {
                word: opener,
                origin: ChoiceOrigin::Opener,
            };
        }

        if state.len() == 1 {
            return Choice {
                word: state.words()[0],
                origin: ChoiceOrigin::SoleCandidate,
            };
        }

        if state.len() == 2 {
            return Choice {
                word: state.first_alphabetical(),
                origin: ChoiceOrigin::SmallestOfPair,
            };
        }

        let pool: &[Word] = if state.len() <= self.pool_threshold {
            state.words()
        } else {
            lexicon.allowed()
        };

        let deadline = Instant::now() + self.time_budget;
        let outcome = match &self.workers {
            Some(workers) => workers.install(|| scan(pool, state, deadline)),
            None => scan(pool, state, deadline),
        };

        match outcome.best {
            Some(best) => Choice {
                word: best.word,
                origin: ChoiceOrigin::Scan {
                    entropy: best.entropy,
                    evaluated: outcome.evaluated,
                },
            },
            None => Choice {
                word: state.first_alphabetical(),
                origin: ChoiceOrigin::DeadlineFallback,
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Scored {
    word: Word,
    entropy: f64,
    is_candidate: bool,
}

#[derive(Debug, Default)]
struct ScanOutcome {
    best: Option<Scored>,
    evaluated: usize,
}

/// Pick the better of two scored guesses
///
/// Higher entropy wins; on exact ties candidates beat probing words (a
/// candidate tie-winner can end the game outright), and remaining ties go
/// to the alphabetically smaller word. Entropy values are reproducible per
/// guess, so this order is deterministic across runs and worker counts.
fn better(a: Scored, b: Scored) -> Scored {
    if a.entropy != b.entropy {
        return if a.entropy > b.entropy { a } else { b };
    }
    if a.is_candidate != b.is_candidate {
        return if a.is_candidate { a } else { b };
    }
    if a.word <= b.word { a } else { b }
}

fn scan(pool: &[Word], state: &CandidateState, deadline: Instant) -> ScanOutcome {
    let candidate_set: FxHashSet<Word> = state.words().iter().copied().collect();

    pool.par_iter()
        .fold(ScanOutcome::default, |mut acc, &word| {
            // Cooperative budget check; an evaluation once started always
            // runs to completion
            if Instant::now() >= deadline {
                return acc;
            }

            let scored = Scored {
                word,
                entropy: entropy(&word, state.words()),
                is_candidate: candidate_set.contains(&word),
            };
            acc.evaluated += 1;
            acc.best = Some(match acc.best {
                Some(best) => better(best, scored),
                None => scored,
            });
            acc
        })
        .reduce(ScanOutcome::default, |a, b| ScanOutcome {
            evaluated: a.evaluated + b.evaluated,
            best: match (a.best, b.best) {
                (Some(x), Some(y)) => Some(better(x, y)),
                (x, None) => x,
                (None, y) => y,
            },
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn lexicon(allowed: &[&str], answers: &[&str]) -> Lexicon {
        Lexicon::new(words(allowed), words(answers)).unwrap()
    }

    fn selector(config: &SolverConfig) -> Selector {
        Selector::from_config(config).unwrap()
    }

    #[test]
    fn opener_played_before_anything_is_learned() {
        let lexicon = lexicon(
            &["salet", "crane", "crate", "crave"],
            &["crane", "crate", "crave"],
        );
        let state = CandidateState::new(lexicon.answers());

        let config = SolverConfig::default();
        let choice = selector(&config).choose(&lexicon, &state);

        assert_eq!(choice.word, Word::new("salet").unwrap());
        assert_eq!(choice.origin, ChoiceOrigin::Opener);
    }

    #[test]
    fn disabled_opener_scans_turn_one() {
        let lexicon = lexicon(
            &["crane", "cramp", "noise", "pygmy"],
            &["crane", "cramp", "noise", "pygmy"],
        );
        let state = CandidateState::new(lexicon.answers());

        let config = SolverConfig {
            opener: None,
            ..SolverConfig::default()
        };
        let choice = selector(&config).choose(&lexicon, &state);

        assert!(matches!(choice.origin, ChoiceOrigin::Scan { .. }));
    }

    #[test]
    fn sole_candidate_is_guessed_directly() {
        let lexicon = lexicon(&["crane", "crate"], &["crane", "crate"]);
        let state = CandidateState::new(lexicon.answers());
        let guess = Word::new("crate").unwrap();
        let state = state.filter(&guess, crate::core::Pattern::PERFECT).unwrap();

        let choice = selector(&SolverConfig::default()).choose(&lexicon, &state);
        assert_eq!(choice.word, guess);
        assert_eq!(choice.origin, ChoiceOrigin::SoleCandidate);
    }

    #[test]
    fn two_candidates_take_the_alphabetically_smaller() {
        let lexicon = lexicon(
            &["salet", "crane", "crate", "grade"],
            &["crate", "crane"],
        );
        let state = CandidateState::new(lexicon.answers());

        // Opener shortcut is skipped by disabling it; two-left applies
        let config = SolverConfig {
            opener: None,
            ..SolverConfig::default()
        };
        let choice = selector(&config).choose(&lexicon, &state);

        assert_eq!(choice.word, Word::new("crane").unwrap());
        assert_eq!(choice.origin, ChoiceOrigin::SmallestOfPair);
    }

    #[test]
    fn scan_prefers_higher_entropy() {
        // ZZZZZ splits nothing; CRANE splits everything
        let lexicon = lexicon(
            &["zzzzz", "crane", "noise", "pygmy", "budge"],
            &["crane", "noise", "pygmy", "budge"],
        );
        let state = CandidateState::new(lexicon.answers());

        let config = SolverConfig {
            opener: None,
            ..SolverConfig::default()
        };
        let choice = selector(&config).choose(&lexicon, &state);

        assert_eq!(choice.word, Word::new("crane").unwrap());
        match choice.origin {
            ChoiceOrigin::Scan { entropy, evaluated } => {
                assert!((entropy - 2.0).abs() < 0.001);
                assert_eq!(evaluated, lexicon.allowed().len());
            }
            other => panic!("expected scan, got {other:?}"),
        }
    }

    #[test]
    fn scan_ties_prefer_candidates_over_probes() {
        // ABBBB partitions the candidates exactly like BBBBB does and sorts
        // first, but BBBBB can win the game on the spot
        let lexicon = lexicon(
            &["abbbb", "bbbbb", "ccccc", "ddddd"],
            &["bbbbb", "ccccc", "ddddd"],
        );
        let state = CandidateState::new(lexicon.answers());

        let config = SolverConfig {
            opener: None,
            ..SolverConfig::default()
        };
        let choice = selector(&config).choose(&lexicon, &state);

        assert_eq!(choice.word, Word::new("bbbbb").unwrap());
    }

    #[test]
    fn scan_ties_between_candidates_go_alphabetical() {
        let lexicon = lexicon(
            &["bbbbb", "ccccc", "ddddd"],
            &["ddddd", "ccccc", "bbbbb"],
        );
        let state = CandidateState::new(lexicon.answers());

        let config = SolverConfig {
            opener: None,
            ..SolverConfig::default()
        };
        let choice = selector(&config).choose(&lexicon, &state);

        assert_eq!(choice.word, Word::new("bbbbb").unwrap());
    }

    #[test]
    fn small_candidate_pools_skip_probing_words() {
        // BCDZZ would out-split every candidate, but once the pool threshold
        // is reached only candidates are scanned
        let lexicon = lexicon(
            &["bcdzz", "bbbbb", "ccccc", "ddddd"],
            &["bbbbb", "ccccc", "ddddd"],
        );
        let state = CandidateState::new(lexicon.answers());

        let config = SolverConfig {
            opener: None,
            pool_threshold: 3,
            ..SolverConfig::default()
        };
        let choice = selector(&config).choose(&lexicon, &state);

        assert_eq!(choice.word, Word::new("bbbbb").unwrap());
        match choice.origin {
            ChoiceOrigin::Scan { evaluated, .. } => assert_eq!(evaluated, 3),
            other => panic!("expected scan, got {other:?}"),
        }
    }

    #[test]
    fn expired_budget_degrades_to_first_candidate() {
        let lexicon = lexicon(
            &["salet", "crane", "crate", "crave"],
            &["crate", "crane", "crave"],
        );
        let state = CandidateState::new(lexicon.answers());

        let config = SolverConfig {
            opener: None,
            time_budget: Duration::ZERO,
            ..SolverConfig::default()
        };
        let choice = selector(&config).choose(&lexicon, &state);

        assert_eq!(choice.word, Word::new("crane").unwrap());
        assert_eq!(choice.origin, ChoiceOrigin::DeadlineFallback);
    }

    #[test]
    fn dedicated_worker_pool_matches_global_pool() {
        let lexicon = lexicon(
            &["zzzzz", "crane", "cramp", "noise", "pygmy"],
            &["crane", "cramp", "noise", "pygmy"],
        );
        let state = CandidateState::new(lexicon.answers());

        let base = SolverConfig {
            opener: None,
            ..SolverConfig::default()
        };
        let single = SolverConfig {
            max_workers: Some(1),
            ..base.clone()
        };

        let global = selector(&base).choose(&lexicon, &state);
        let dedicated = selector(&single).choose(&lexicon, &state);
        assert_eq!(global.word, dedicated.word);
    }
}
