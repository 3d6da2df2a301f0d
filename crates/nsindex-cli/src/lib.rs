//! nsindex CLI - generate a namespaced export index from a symbol list.
//!
//! This crate wraps the `nsindex` library with argument parsing, layered
//! configuration, logging, and file output.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`config`] - Layered configuration (figment)
//! - [`commands`] - `generate` and `check` implementations
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status lines and summaries on stderr

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
