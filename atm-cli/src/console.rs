//! Console terminal - stdin/stdout with colors and optional PIN masking

use atm_core::adapters::LineTerminal;
use atm_core::ports::{Terminal, Tone};
use atm_core::Error;
use dialoguer::Password;
use std::io::{StdinLock, Stdout};

use crate::output;

type Result<T> = std::result::Result<T, Error>;

/// Terminal used by the `atm` binary
pub struct ConsoleTerminal {
    lines: LineTerminal<StdinLock<'static>, Stdout>,
    mask_secrets: bool,
}

impl ConsoleTerminal {
    /// `mask_pin` only takes effect when stdin is an interactive terminal
    pub fn new(mask_pin: bool) -> Self {
        Self {
            lines: LineTerminal::stdio(),
            mask_secrets: mask_pin && atty::is(atty::Stream::Stdin),
        }
    }
}

impl Terminal for ConsoleTerminal {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.lines.read_line(prompt)
    }

    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>> {
        if !self.mask_secrets {
            return self.lines.read_line(prompt);
        }

        // dialoguer draws the prompt on stderr and adds its own ": "
        let label = prompt.trim_end().trim_end_matches(':');
        let secret = Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| Error::terminal(e.to_string()))?;
        Ok(Some(secret))
    }

    fn write_line(&mut self, tone: Tone, message: &str) -> Result<()> {
        self.lines.write_line(Tone::Plain, &output::styled(tone, message))
    }
}
