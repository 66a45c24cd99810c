//! Word list loading and validation
//!
//! A [`Lexicon`] holds the two immutable word sets the solver needs: the
//! allowed guesses and the possible answers. Both are loaded once at startup
//! from plain-text files (one word per line) and shared by reference for the
//! life of the process.

use crate::core::{Word, WordError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The allowed-guess set and the answer set
///
/// Invariant: answers are a subset of the allowed guesses, and neither list
/// is empty. Construction fails otherwise.
#[derive(Debug, Clone)]
pub struct Lexicon {
    allowed: Vec<Word>,
    answers: Vec<Word>,
    allowed_set: FxHashSet<Word>,
}

/// Error type for word-list loading and validation
#[derive(Debug)]
pub enum LexiconError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    BadEntry {
        path: PathBuf,
        line: usize,
        text: String,
        source: WordError,
    },
    AnswerNotAllowed(Word),
    EmptyList(&'static str),
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::BadEntry {
                path,
                line,
                text,
                source,
            } => write!(
                f,
                "{}:{line}: invalid word {text:?}: {source}",
                path.display()
            ),
            Self::AnswerNotAllowed(word) => {
                write!(f, "Answer {word} is not in the allowed-guess list")
            }
            Self::EmptyList(which) => write!(f, "The {which} list is empty"),
        }
    }
}

impl std::error::Error for LexiconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::BadEntry { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Lexicon {
    /// Build a lexicon from already-parsed word lists
    ///
    /// Duplicates are dropped (first occurrence wins).
    ///
    /// # Errors
    /// Returns `LexiconError` if either list is empty or an answer is
    /// missing from the allowed list.
    pub fn new(allowed: Vec<Word>, answers: Vec<Word>) -> Result<Self, LexiconError> {
        let allowed = dedupe(allowed);
        let answers = dedupe(answers);

        if allowed.is_empty() {
            return Err(LexiconError::EmptyList("allowed-guess"));
        }
        if answers.is_empty() {
            return Err(LexiconError::EmptyList("answer"));
        }

        let allowed_set: FxHashSet<Word> = allowed.iter().copied().collect();
        if let Some(&stray) = answers.iter().find(|w| !allowed_set.contains(w)) {
            return Err(LexiconError::AnswerNotAllowed(stray));
        }

        Ok(Self {
            allowed,
            answers,
            allowed_set,
        })
    }

    /// Load a lexicon from the two word-list files
    ///
    /// Each file holds one word per line. Lines are trimmed and blank lines
    /// skipped; any other entry that is not exactly five ASCII letters is an
    /// error naming the file and line.
    ///
    /// # Errors
    /// Returns `LexiconError` on I/O failure, on an invalid entry, or if the
    /// loaded lists fail validation (see [`Lexicon::new`]).
    pub fn load(
        allowed_path: impl AsRef<Path>,
        answers_path: impl AsRef<Path>,
    ) -> Result<Self, LexiconError> {
        let allowed = read_words(allowed_path.as_ref())?;
        let answers = read_words(answers_path.as_ref())?;
        Self::new(allowed, answers)
    }

    /// All words the judge accepts as guesses
    #[inline]
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    /// All words the judge may pick as the hidden answer
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Check whether a word is an accepted guess
    #[inline]
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed_set.contains(word)
    }
}

fn read_words(path: &Path) -> Result<Vec<Word>, LexiconError> {
    let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut words = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed).map_err(|source| LexiconError::BadEntry {
            path: path.to_path_buf(),
            line: index + 1,
            text: trimmed.to_string(),
            source,
        })?;
        words.push(word);
    }

    Ok(words)
}

fn dedupe(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words.into_iter().filter(|w| seen.insert(*w)).collect()
}
