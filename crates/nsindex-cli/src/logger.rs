//! Logging infrastructure for the nsindex CLI.
//!
//! Structured logging via the `tracing` ecosystem. Log lines go to stderr,
//! leaving stdout free for `generate --stdout`.
//!
//! # Example
//!
//! ```rust,no_run
//! use nsindex_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Generating index");
//! debug!("Reading symbol list: {}", "build/info.json");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "nsindex=debug,nsindex_cli=debug";
const QUIET_FILTER: &str = "nsindex=error,nsindex_cli=error";
const DEFAULT_FILTER: &str = "nsindex=warn,nsindex_cli=info";

/// Build the filter for the given verbosity flags.
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for nsindex crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for the CLI, WARN for the library
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber.
///
/// Should be called once at the start of the program, before any logging
/// occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be installed once per process, so these
    // tests only cover filter construction.

    #[test]
    fn test_verbose_filter() {
        let filter = build_filter(true, false);
        assert!(filter.to_string().contains("nsindex=debug"));
    }

    #[test]
    fn test_quiet_filter() {
        let filter = build_filter(false, true);
        assert!(filter.to_string().contains("nsindex=error"));
    }
}
