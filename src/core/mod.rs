//! Core domain types
//!
//! Words and feedback patterns, shared by every other module.

mod pattern;
mod word;

pub use pattern::{Feedback, Pattern};
pub use word::{Word, WordError};
