use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::QuoteStyle;
use crate::cli::validation::parse_global;

/// Available nsindex subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the export index
    ///
    /// Reads the symbol list, synthesizes imports and namespace assignments,
    /// and writes the result to the output file (or stdout).
    Generate(GenerateArgs),

    /// Validate a symbol list without writing output
    ///
    /// Runs the full generation pipeline and reports the detected root
    /// namespace together with import, namespace and export counts.
    Check(CheckArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Symbol list produced by the documentation step
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// File to write the generated index to
    ///
    /// The parent directory is created if it doesn't exist.
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Global object the root namespace is attached to
    ///
    /// Must be a valid JavaScript identifier (e.g. window, self, globalThis).
    #[arg(short, long, value_name = "NAME", value_parser = parse_global)]
    pub global: Option<String>,

    /// Quote style for module specifiers
    #[arg(long, value_enum)]
    pub quote: Option<QuoteStyle>,

    /// Print the generated index to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Path to config file (defaults to nsindex.config.json when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Symbol list produced by the documentation step
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Path to config file (defaults to nsindex.config.json when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
