//! Command-line interface definition for nsindex.
//!
//! This module defines the CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `nsindex` - Same as `nsindex generate` with default paths
//! - `nsindex generate` - Write the export index for a symbol list
//! - `nsindex check` - Validate a symbol list without writing anything

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, GenerateArgs};
pub use enums::*;
pub use validation::parse_global;

/// nsindex - namespaced export index generator
#[derive(Parser, Debug)]
#[command(
    name = "nsindex",
    version,
    about = "Generate a namespaced JavaScript export index from a symbol list",
    long_about = "nsindex reads the symbol list written by the documentation step\n\
                  (build/info.json by default) and generates an entry file that imports\n\
                  every documented module and assigns it onto a single global namespace."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress status output and logging except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The command to run, falling back to `generate` with default arguments
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Generate(GenerateArgs::default()))
    }
}
