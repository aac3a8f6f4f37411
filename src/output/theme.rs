//! Console color theme

use colored::{ColoredString, Colorize};

/// Fatal problems
pub fn error(text: &str) -> ColoredString {
    text.red().bold()
}

/// Problems the tool recovers from
pub fn warning(text: &str) -> ColoredString {
    text.yellow()
}

/// Completed actions
pub fn success(text: &str) -> ColoredString {
    text.green().bold()
}

/// Headlines and the install command
pub fn info(text: &str) -> ColoredString {
    text.bold()
}

/// Secondary details such as version specifiers
pub fn placeholder(text: &str) -> ColoredString {
    text.bright_black()
}
