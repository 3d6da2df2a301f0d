//! Terminal output helpers.
//!
//! Status lines and the generation summary go to stderr so that
//! `nsindex generate --stdout` can be piped. `--quiet` silences all of them;
//! errors are rendered by `main` through miette.
//!
//! # Examples
//!
//! ```no_run
//! use nsindex_cli::ui;
//!
//! ui::init_colors(false);
//! ui::set_quiet(false);
//! ui::success("Generated build/index.js");
//! ```

mod format;
mod messages;

pub use format::{format_duration, format_size, print_index_summary};
pub use messages::{info, success, warning};

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress status lines and summaries for the rest of the process.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on environment and the `--no-color` flag.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    owo_colors::set_override(enabled);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_should_use_color_no_color_overrides_force() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(!should_use_color());
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::remove_var("FORCE_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_set_quiet() {
        set_quiet(true);
        assert!(is_quiet());
        // Should not print or panic
        success("hidden");
        set_quiet(false);
        assert!(!is_quiet());
    }

    #[test]
    #[serial]
    fn test_should_use_color_force_color() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(should_use_color());
        unsafe { std::env::remove_var("FORCE_COLOR") };
    }
}
