//! Display functions for command results

use super::formatters::{colorize_guess, pattern_to_emoji};
use crate::commands::{Analysis, GauntletStats};
use crate::solver::{Outcome, Report};
use colored::Colorize;

/// Print a game report, one line per turn
pub fn print_report(report: &Report, verbose: bool) {
    println!();
    for (index, turn) in report.turns.iter().enumerate() {
        println!(
            "Turn {}: {} {}",
            index + 1,
            colorize_guess(&turn.guess, turn.pattern),
            pattern_to_emoji(turn.pattern)
        );

        if verbose {
            println!("  Candidates left: {}", turn.remaining);
            if let Some(entropy) = turn.entropy {
                println!("  Entropy:         {entropy:.3} bits");
            }
            println!(
                "  Turn time:       {:.1}ms",
                turn.duration.as_secs_f64() * 1000.0
            );
        }
    }

    println!();
    match report.outcome {
        Outcome::Win { turns } => println!(
            "{}",
            format!(
                "Solved in {turns} guess{}",
                if turns == 1 { "" } else { "es" }
            )
            .green()
            .bold()
        ),
        Outcome::Loss => println!(
            "{}",
            format!("Out of turns after {} guesses", report.turns.len())
                .red()
                .bold()
        ),
    }
}

/// Print aggregated gauntlet statistics
pub fn print_gauntlet_stats(stats: &GauntletStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GAUNTLET RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games);
    println!(
        "   Wins:             {} {}",
        stats.wins,
        format!("({:.1}%)", stats.win_rate * 100.0).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", stats.mean_turns).bright_yellow().bold()
    );
    println!(
        "   Time taken:       {:.2}s",
        stats.duration.as_secs_f64()
    );
    println!("   Games/second:     {:.1}", stats.games_per_second);

    println!("\n{}", "Guess distribution:".bright_cyan().bold());
    let most = stats.distribution.values().max().copied().unwrap_or(1);
    for turns in 1..=6 {
        let count = stats.distribution.get(&turns).copied().unwrap_or(0);
        let width = if most > 0 {
            (count * 40 / most).max(usize::from(count > 0))
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(width).green(),
            "░".repeat(40 - width).bright_black()
        );
        let share = if stats.wins > 0 {
            count as f64 / stats.wins as f64 * 100.0
        } else {
            0.0
        };
        println!("  {turns} guesses: {bar} {count:4} ({share:5.1}%)");
    }

    if !stats.hardest.is_empty() {
        println!("\n{}", "Hardest words:".yellow().bold());
        for (word, turns) in &stats.hardest {
            println!("  {} ({turns} guesses)", word.to_string().yellow());
        }
    }

    if !stats.missed.is_empty() {
        println!("\n{}", "Missed words:".red().bold());
        for word in &stats.missed {
            println!("  {}", word.to_string().red());
        }
    }
}

/// Print the analysis of a single word
pub fn print_analysis(analysis: &Analysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        analysis.word.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\nAgainst {} possible answers:", analysis.candidates);
    println!(
        "   Entropy:          {}",
        format!("{:.3} bits", analysis.metrics.entropy).bright_yellow()
    );
    println!(
        "   Expected remain:  {:.1} candidates",
        analysis.metrics.expected_remaining
    );
    println!(
        "   Worst case:       {} candidates",
        analysis.metrics.max_partition
    );
}
