//! nsindex CLI entry point.
//!
//! Parses arguments, initializes logging, and dispatches to a command.

use clap::Parser;
use miette::Result;
use nsindex_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);
    ui::set_quiet(args.quiet);

    let result = match args.command_or_default() {
        cli::Command::Generate(generate_args) => commands::generate_execute(generate_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    result.map_err(error::cli_error_to_miette)
}
