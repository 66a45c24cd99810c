//! Wordle Bot - CLI
//!
//! Autonomous Wordle solver: entropy-maximizing guess selection under a
//! per-turn time budget, against an in-process judge or a relayed external
//! game.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use wordle_bot::{
    commands::{analyze_word, run_assist, run_gauntlet, solve_word},
    core::Word,
    output::{print_analysis, print_gauntlet_stats, print_report},
    solver::{DEFAULT_OPENER, SolverConfig},
    wordlists::Lexicon,
};

#[derive(Parser)]
#[command(
    name = "wordle_bot",
    about = "Autonomous Wordle solver using information theory",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Allowed-guess list, one 5-letter word per line
    #[arg(long, global = true, default_value = "data/allowed.txt")]
    allowed: PathBuf,

    /// Answer list, a subset of the allowed list
    #[arg(long, global = true, default_value = "data/answers.txt")]
    answers: PathBuf,

    /// Maximum guesses per game
    #[arg(long, global = true, default_value_t = 6)]
    max_turns: usize,

    /// Wall-clock budget per guess selection, in seconds
    #[arg(long, global = true, default_value_t = 5.0)]
    time_budget: f64,

    /// Worker threads for guess selection (default: one per core)
    #[arg(long, global = true)]
    workers: Option<usize>,

    /// First guess; pass an empty string to scan on turn one too
    #[arg(long, global = true)]
    opener: Option<String>,

    /// Scan only the remaining candidates once their count drops to this
    #[arg(long, global = true, default_value_t = 2)]
    pool_threshold: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word against the built-in judge
    Solve {
        /// The hidden answer to find
        word: String,

        /// Show per-turn candidate counts and timings
        #[arg(short, long)]
        verbose: bool,
    },

    /// Drive an external game; type the judge's feedback after each guess
    Assist,

    /// Play every answer and aggregate statistics
    Gauntlet {
        /// Only play the first N answers
        #[arg(short, long)]
        limit: Option<usize>,

        /// Play a random sample of N answers instead
        #[arg(short, long, conflicts_with = "limit")]
        sample: Option<usize>,
    },

    /// Analyze the entropy of a word against the answer set
    Analyze {
        /// Word to analyze
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    let lexicon = Lexicon::load(&cli.allowed, &cli.answers)?;

    match &cli.command {
        Commands::Solve { word, verbose } => {
            let report = solve_word(word, &lexicon, &config)?;
            print_report(&report, *verbose);
        }
        Commands::Assist => {
            let report = run_assist(&lexicon, &config)?;
            print_report(&report, false);
        }
        Commands::Gauntlet { limit, sample } => {
            let stats = run_gauntlet(&lexicon, &config, *limit, *sample)?;
            print_gauntlet_stats(&stats);
        }
        Commands::Analyze { word } => {
            let analysis = analyze_word(word, &lexicon)?;
            print_analysis(&analysis);
        }
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<SolverConfig> {
    if cli.max_turns == 0 {
        bail!("--max-turns must be at least 1");
    }
    if !(cli.time_budget > 0.0) {
        bail!("--time-budget must be positive");
    }
    if cli.workers == Some(0) {
        bail!("--workers must be at least 1");
    }

    let opener = match cli.opener.as_deref() {
        None => Some(DEFAULT_OPENER),
        Some("") => None,
        Some(text) => Some(Word::new(text).context("Invalid opener word")?),
    };

    Ok(SolverConfig {
        max_turns: cli.max_turns,
        time_budget: Duration::from_secs_f64(cli.time_budget),
        max_workers: cli.workers,
        opener,
        pool_threshold: cli.pool_threshold,
    })
}
