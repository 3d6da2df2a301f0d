//! Status message functions for terminal output.

use owo_colors::{OwoColorize, Stream::Stderr, Style};

use super::is_quiet;

/// Print a success message to stderr.
pub fn success(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!(
        "{} {}",
        "✓".if_supports_color(Stderr, |t| t.style(Style::new().green().bold())),
        message
    );
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!(
        "{} {}",
        "ℹ".if_supports_color(Stderr, |t| t.style(Style::new().blue().bold())),
        message
    );
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!(
        "{} {}",
        "⚠".if_supports_color(Stderr, |t| t.style(Style::new().yellow().bold())),
        message.if_supports_color(Stderr, |t| t.yellow())
    );
}
