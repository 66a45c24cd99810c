//! Terminal bridge to an external judge
//!
//! For games running somewhere the solver cannot reach (a phone, a website),
//! the operator relays each guess by hand: the oracle prints the guess and
//! reads the judge's feedback back as an E/P/A line. Malformed lines are
//! re-prompted; end of input means the judge hung up.

use super::{Oracle, OracleError};
use crate::core::{Pattern, Word};
use std::io::{self, BufRead, Write};

/// A judge driven through the terminal by a human operator
///
/// Generic over its reader and writer so the prompt loop can be tested
/// without a terminal.
#[derive(Debug)]
pub struct ConsoleOracle<R, W> {
    input: R,
    output: W,
}

impl ConsoleOracle<io::StdinLock<'static>, io::StdoutLock<'static>> {
    /// Create an oracle wired to stdin/stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> ConsoleOracle<R, W> {
    /// Create an oracle over the given reader and writer
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> Result<String, OracleError> {
        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .map_err(|e| OracleError::Transport(e.to_string()))?;
        if bytes == 0 {
            return Err(OracleError::Closed);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Oracle for ConsoleOracle<R, W> {
    fn submit(&mut self, guess: &Word) -> Result<Pattern, OracleError> {
        writeln!(self.output, "\nPlay this guess: {guess}")
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        loop {
            write!(self.output, "Feedback (E/P/A, or 'win'): ")
                .map_err(|e| OracleError::Transport(e.to_string()))?;
            self.output
                .flush()
                .map_err(|e| OracleError::Transport(e.to_string()))?;

            let line = self.read_line()?;

            if line.eq_ignore_ascii_case("win") {
                return Ok(Pattern::PERFECT);
            }

            if let Some(pattern) = Pattern::parse(&line) {
                return Ok(pattern);
            }

            writeln!(
                self.output,
                "Could not read {line:?}; expected five of E/P/A, like APAEP"
            )
            .map_err(|e| OracleError::Transport(e.to_string()))?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn submit_with_input(input: &str) -> (Result<Pattern, OracleError>, String) {
        let mut output = Vec::new();
        let result = {
            let mut oracle = ConsoleOracle::new(Cursor::new(input.as_bytes()), &mut output);
            oracle.submit(&Word::new("salet").unwrap())
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn console_parses_feedback_line() {
        let (result, output) = submit_with_input("APAPA\n");
        assert_eq!(result.unwrap(), Pattern::parse("APAPA").unwrap());
        assert!(output.contains("SALET"));
    }

    #[test]
    fn console_accepts_emoji_feedback() {
        let (result, _) = submit_with_input("🟩🟨⬜🟩🟨\n");
        assert_eq!(result.unwrap(), Pattern::parse("EPAEP").unwrap());
    }

    #[test]
    fn console_win_shortcut_is_perfect() {
        let (result, _) = submit_with_input("win\n");
        assert!(result.unwrap().is_perfect());
    }

    #[test]
    fn console_reprompts_on_garbage() {
        let (result, output) = submit_with_input("greens\nEEEEE\n");
        assert!(result.unwrap().is_perfect());
        assert!(output.contains("Could not read"));
    }

    #[test]
    fn console_end_of_input_is_closed() {
        let (result, _) = submit_with_input("");
        assert!(matches!(result, Err(OracleError::Closed)));
    }
}
