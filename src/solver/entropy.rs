//! Shannon entropy over feedback patterns
//!
//! Given a guess and the remaining candidates, computes the expected
//! information gain of playing the guess. Candidates are bucketed by the
//! pattern they would produce; because pattern codes live in [0, 243) the
//! buckets are a flat array and scoring a guess is one pass over the
//! candidates plus one pass over the array. Summation order is fixed, so a
//! guess always scores to bit-identical values regardless of thread count.

use crate::core::{Pattern, Word};

/// Metrics for evaluating a single guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Largest pattern bucket (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Count candidates per feedback pattern
///
/// Index k holds the number of candidates that would produce the pattern
/// with code k when `guess` is played.
#[must_use]
pub fn pattern_histogram(guess: &Word, candidates: &[Word]) -> [u32; Pattern::COUNT] {
    let mut buckets = [0u32; Pattern::COUNT];
    for candidate in candidates {
        buckets[Pattern::calculate(guess, candidate).code() as usize] += 1;
    }
    buckets
}

/// Calculate Shannon entropy for a guess against the candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H = -Σ p(k) · log₂(p(k))
///
/// where p(k) is the probability of observing pattern k, candidates assumed
/// uniform. Empty buckets contribute nothing; one or zero candidates mean
/// zero bits.
///
/// # Examples
/// ```
/// use wordle_bot::core::Word;
/// use wordle_bot::solver::entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let bits = entropy(&guess, &candidates);
/// assert!(bits > 0.0 && bits <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.len() <= 1 {
        return 0.0;
    }

    let buckets = pattern_histogram(guess, candidates);
    let total = candidates.len() as f64;

    buckets
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining candidates, and the worst-case
/// partition for a guess
#[must_use]
pub fn metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let buckets = pattern_histogram(guess, candidates);
    let total = candidates.len() as f64;

    let mut entropy = 0.0;
    let mut expected_remaining = 0.0;
    let mut max_partition = 0u32;

    for &count in buckets.iter().filter(|&&count| count > 0) {
        let p = f64::from(count) / total;
        entropy -= p * p.log2();
        expected_remaining += p * f64::from(count);
        max_partition = max_partition.max(count);
    }

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition: max_partition as usize,
    }
}
