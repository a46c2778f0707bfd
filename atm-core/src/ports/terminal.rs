//! Terminal port
//!
//! The session talks to the user exclusively through this trait, one line
//! at a time.

use crate::domain::result::Result;

/// How a message should be presented
///
/// Adapters are free to ignore the tone (plain text output does).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Section headers such as the menu title
    Heading,
    Success,
    Warning,
    Error,
}

/// Blocking, line-based user terminal
pub trait Terminal {
    /// Show `prompt` without a trailing newline and read one line.
    ///
    /// The returned line has its line terminator removed and is otherwise
    /// untouched. `Ok(None)` means the input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Read a secret such as a PIN.
    ///
    /// Defaults to `read_line`; adapters may hide the typed characters.
    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>> {
        self.read_line(prompt)
    }

    /// Write one line of output
    fn write_line(&mut self, tone: Tone, message: &str) -> Result<()>;
}
