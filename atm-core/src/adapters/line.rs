//! Line terminal - plain text over a reader/writer pair
//!
//! Used for stdin/stdout in the binary and for in-memory scripts in tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::domain::result::Result;
use crate::ports::{Terminal, Tone};

/// Terminal adapter that reads lines from `R` and writes text to `W`
pub struct LineTerminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineTerminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Borrow the output sink
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl LineTerminal<StdinLock<'static>, Stdout> {
    /// Terminal bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

/// Drop a trailing `\n` or `\r\n`
fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

impl<R: BufRead, W: Write> Terminal for LineTerminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the next message off the prompt line
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }

    fn write_line(&mut self, _tone: Tone, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}
