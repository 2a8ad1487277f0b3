use std::io::{self, BufRead, Write};

use tracing::{debug, trace};

use crate::interpreter::evaluator::core::Evaluator;

/// Printed once when the shell starts.
pub const BANNER: &str = "Console Calculator (supports +, -, *, /, ^, and parentheses)";
/// Printed once after the banner.
pub const HINT: &str = "Type 'exit' to quit.";
/// Printed before every line is read.
pub const PROMPT: &str = "Enter an expression: ";
/// Printed when the user types `exit`.
pub const EXIT_MESSAGE: &str = "Exiting calculator...";

/// An interactive read-evaluate-print loop around an [`Evaluator`].
///
/// Generic over its input and output so it can drive a terminal or an
/// in-memory transcript.
pub struct Shell<R, W> {
    evaluator: Evaluator,
    input:     R,
    output:    W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell reading from `input` and writing to `output`.
    pub const fn new(evaluator: Evaluator, input: R, output: W) -> Self {
        Self { evaluator,
               input,
               output }
    }

    /// Runs the loop until `exit` is entered or the input ends.
    ///
    /// Every line has all whitespace removed before it is looked at. `exit`
    /// is matched case-insensitively. Anything else is evaluated and answered
    /// with `Result: <value>` or `Error: <message>`; evaluation failures never
    /// stop the loop.
    ///
    /// # Errors
    /// Returns any I/O error from reading input or writing output.
    ///
    /// # Example
    /// ```
    /// use infixa::{interpreter::evaluator::core::Evaluator, shell::Shell};
    ///
    /// let mut shell = Shell::new(Evaluator::new(), "1 + 1\nexit\n".as_bytes(), Vec::new());
    /// shell.run().unwrap();
    ///
    /// let transcript = String::from_utf8(shell.into_output()).unwrap();
    /// assert!(transcript.contains("Result: 2.0"));
    /// ```
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output, "{HINT}")?;

        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed");
                writeln!(self.output)?;
                return Ok(());
            }

            let expression = strip_whitespace(&line);
            if expression.eq_ignore_ascii_case("exit") {
                writeln!(self.output, "{EXIT_MESSAGE}")?;
                return Ok(());
            }

            match self.evaluator.evaluate(&expression) {
                Ok(value) => {
                    trace!(%expression, value, "evaluated");
                    writeln!(self.output, "Result: {value:?}")?;
                },
                Err(e) => {
                    debug!(%expression, error = ?e, "evaluation failed");
                    writeln!(self.output, "Error: {e}")?;
                },
            }
        }
    }

    /// Consumes the shell and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Removes every whitespace character from `line`.
///
/// # Example
/// ```
/// use infixa::shell::strip_whitespace;
///
/// assert_eq!(strip_whitespace(" 3 +\t4 \n"), "3+4");
/// ```
#[must_use]
pub fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}
