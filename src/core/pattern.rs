//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback for a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Exact (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::Word;
use std::fmt;

/// Per-position feedback symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Feedback {
    /// Gray: letter does not appear (or all its copies are used up)
    Absent = 0,
    /// Yellow: letter appears at a different position
    Present = 1,
    /// Green: letter is at exactly this position
    Exact = 2,
}

impl Feedback {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (winning pattern)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct patterns
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw code
    ///
    /// # Panics
    /// Panics in debug mode if code >= 243
    #[inline]
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        debug_assert!(code < 243, "Pattern code must be < 243");
        Self(code)
    }

    /// Get the raw pattern code (0-242)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Check if this is the winning pattern (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Calculate the pattern when `guess` is played and `answer` is hidden
    ///
    /// Implements the judge's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those answer letters
    /// 2. Second pass: mark present-but-misplaced letters from the leftover
    ///    pool, everything else is absent
    /// 3. Encode as a base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_bot::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // C(absent) R(absent) A(exact) N(absent) E(exact)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.code(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut digits = [0u8; 5];
        // Counts of answer letters not consumed by an exact match
        let mut leftover = [0u8; 26];

        for i in 0..5 {
            if guess.letter_at(i) == answer.letter_at(i) {
                digits[i] = 2;
            } else {
                leftover[(answer.letter_at(i) - b'A') as usize] += 1;
            }
        }

        for i in 0..5 {
            if digits[i] == 0 {
                let count = &mut leftover[(guess.letter_at(i) - b'A') as usize];
                if *count > 0 {
                    digits[i] = 1;
                    *count -= 1;
                }
            }
        }

        Self::encode(digits.map(Feedback::from_digit))
    }

    /// Encode five feedback symbols into a pattern
    #[must_use]
    pub fn encode(symbols: [Feedback; 5]) -> Self {
        let mut code = 0u8;
        let mut multiplier = 1u8;
        for symbol in symbols {
            code += symbol as u8 * multiplier;
            multiplier *= 3;
        }
        Self(code)
    }

    /// Decode the pattern into its five feedback symbols
    ///
    /// Inverse of [`Pattern::encode`].
    #[must_use]
    pub fn decode(self) -> [Feedback; 5] {
        let mut symbols = [Feedback::Absent; 5];
        let mut code = self.0;
        for symbol in &mut symbols {
            *symbol = Feedback::from_digit(code % 3);
            code /= 3;
        }
        symbols
    }

    /// Parse a pattern from a string like "APAEA" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'E'/'e'/🟩 for exact
    /// - 'P'/'p'/🟨 for present
    /// - 'A'/'a'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_bot::core::Pattern;
    ///
    /// let p1 = Pattern::parse("EPAEP").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != 5 {
            return None;
        }

        let mut symbols = [Feedback::Absent; 5];
        for (symbol, ch) in symbols.iter_mut().zip(chars) {
            *symbol = match ch {
                'E' | 'e' | '🟩' => Feedback::Exact,
                'P' | 'p' | '🟨' => Feedback::Present,
                'A' | 'a' | '⬜' => Feedback::Absent,
                _ => return None,
            };
        }

        Some(Self::encode(symbols))
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.decode() {
            fmt::Write::write_char(
                f,
                match symbol {
                    Feedback::Exact => 'E',
                    Feedback::Present => 'P',
                    Feedback::Absent => 'A',
                },
            )?;
        }
        Ok(())
    }
}
