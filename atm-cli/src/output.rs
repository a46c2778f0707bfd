//! Output formatting utilities

use atm_core::ports::Tone;
use colored::Colorize;

/// Enable or disable colors for everything printed from here on
///
/// Colors are only used when stdout is a terminal and the user did not opt out.
pub fn configure_colors(no_color: bool) {
    let enabled = !no_color && atty::is(atty::Stream::Stdout);
    colored::control::set_override(enabled);
}

/// Style a message for its tone
pub fn styled(tone: Tone, msg: &str) -> String {
    match tone {
        Tone::Plain => msg.to_string(),
        Tone::Heading => msg.bold().to_string(),
        Tone::Success => msg.green().to_string(),
        Tone::Warning => msg.yellow().to_string(),
        Tone::Error => msg.red().to_string(),
    }
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}
