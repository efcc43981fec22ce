//! Terminal styling for error output
//!
//! Error lines are painted red when stderr is a real terminal and left
//! plain when it is redirected, so scripts and tests see bare messages.

/// ANSI escape sequence for red foreground text
pub const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape sequence to reset all formatting
pub const ANSI_RESET: &str = "\x1b[0m";

/// Wrap `message` in red ANSI codes when stderr is a terminal.
pub fn paint_error(message: &str) -> String {
    if atty::is(atty::Stream::Stderr) {
        format!("{}{}{}", ANSI_RED, message, ANSI_RESET)
    } else {
        message.to_string()
    }
}
