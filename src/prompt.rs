//! Line-oriented interactive input
//!
//! The apply workflow asks its questions in a fixed order; `Prompter` wraps
//! the question-then-read-one-line step over generic reader/writer pairs so
//! tests can drive the whole sequence from a `Cursor`.

use std::io::{self, BufRead, Write};

/// Asks questions on `output` and reads one-line answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` on its own line and read the next input line.
    ///
    /// The trailing newline is stripped; interior whitespace is preserved
    /// (answers are not trimmed). An exhausted input reads as an empty
    /// answer, which downstream validation rejects with its own message.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        writeln!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Ask a yes/no question. Only the exact answer `yes` counts as yes.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(self.ask(question)? == "yes")
    }
}
