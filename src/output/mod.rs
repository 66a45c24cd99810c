//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_analysis, print_gauntlet_stats, print_report};
