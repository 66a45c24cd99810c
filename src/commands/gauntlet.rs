//! Gauntlet command
//!
//! Plays one game per answer word and aggregates the results. The whole
//! answer set is the default; `limit` takes a prefix and `sample` draws a
//! random subset instead.

use crate::core::Word;
use crate::oracle::Simulator;
use crate::solver::{Orchestrator, Outcome, SolverConfig};
use crate::wordlists::Lexicon;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Aggregated results of a gauntlet run
#[derive(Debug)]
pub struct GauntletStats {
    pub games: usize,
    pub wins: usize,
    pub win_rate: f64,
    /// Mean turns over won games
    pub mean_turns: f64,
    /// Won games per turn count
    pub distribution: HashMap<usize, usize>,
    /// Won games that needed five or more turns, hardest first
    pub hardest: Vec<(Word, usize)>,
    /// Answers the solver failed to find
    pub missed: Vec<Word>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run the solver over the answer set
///
/// # Errors
/// Returns an error if the orchestrator cannot be built or a game fails
/// outright; losses are counted, not raised.
pub fn run_gauntlet(
    lexicon: &Lexicon,
    config: &SolverConfig,
    limit: Option<usize>,
    sample: Option<usize>,
) -> Result<GauntletStats> {
    let targets: Vec<Word> = match sample {
        Some(n) => lexicon
            .answers()
            .choose_multiple(&mut rand::rng(), n.min(lexicon.answers().len()))
            .copied()
            .collect(),
        None => {
            let take = limit.unwrap_or(lexicon.answers().len());
            lexicon.answers().iter().take(take).copied().collect()
        }
    };

    let orchestrator = Orchestrator::new(lexicon, config)?;

    let bar = ProgressBar::new(targets.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let started = Instant::now();
    let mut wins = 0usize;
    let mut total_win_turns = 0usize;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut hardest: Vec<(Word, usize)> = Vec::new();
    let mut missed: Vec<Word> = Vec::new();

    for (index, &answer) in targets.iter().enumerate() {
        let mut judge = Simulator::new(answer);
        let report = orchestrator.run(&mut judge)?;

        match report.outcome {
            Outcome::Win { turns } => {
                wins += 1;
                total_win_turns += turns;
                *distribution.entry(turns).or_insert(0) += 1;
                if turns >= 5 {
                    hardest.push((answer, turns));
                }
            }
            Outcome::Loss => missed.push(answer),
        }

        if index % 10 == 0 && wins > 0 {
            bar.set_message(format!(
                "Avg: {:.2}",
                total_win_turns as f64 / wins as f64
            ));
        }
        bar.inc(1);
    }

    bar.finish_with_message("Complete!");

    let duration = started.elapsed();
    let games = targets.len();

    hardest.sort_by_key(|&(word, turns)| (std::cmp::Reverse(turns), word));
    hardest.truncate(10);

    Ok(GauntletStats {
        games,
        wins,
        win_rate: if games > 0 {
            wins as f64 / games as f64
        } else {
            0.0
        },
        mean_turns: if wins > 0 {
            total_win_turns as f64 / wins as f64
        } else {
            0.0
        },
        distribution,
        hardest,
        missed,
        duration,
        games_per_second: if duration.as_secs_f64() > 0.0 {
            games as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    })
}
