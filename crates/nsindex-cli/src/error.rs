//! Error handling for the nsindex CLI.
//!
//! `CliError` is the top-level error returned by commands. Generation
//! failures from the library keep their `miette` diagnostics; configuration
//! and I/O failures carry a hint on how to fix them.
//!
//! # Example
//!
//! ```rust,no_run
//! use nsindex_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_symbols(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

use miette::Report;
use nsindex::IndexError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Export index generation failed
    #[error(transparent)]
    Index(#[from] IndexError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Symbol list or config file not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file given with --config doesn't exist
    #[error("Config file not found: {}\n\nHint: Create nsindex.config.json or pass an existing file to --config", .0.display())]
    NotFound(PathBuf),

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

/// Convert a CliError into a miette report for rendering.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Index(e) => Report::new(e),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Run the documentation step first or pass --input <FILE>",
            "File not found: {}",
            path.display()
        ),
        other => miette::miette!("{}", other),
    }
}
