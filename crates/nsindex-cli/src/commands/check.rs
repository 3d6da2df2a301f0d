//! Check command implementation.
//!
//! Runs the generator on a symbol list without writing output.

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::config::{ConfigOverrides, IndexConfig};
use crate::error::Result;
use crate::ui;
use std::time::Instant;

/// Execute the check command.
///
/// # Errors
///
/// Returns the same errors `generate` would (malformed input, mismatching
/// or undefined root), without touching the output file.
pub fn execute(args: CheckArgs) -> Result<()> {
    let start = Instant::now();
    let config = IndexConfig::load(&ConfigOverrides::from(&args), args.config.as_deref())?;

    ui::info(&format!("Checking {}...", config.input.display()));
    let index = utils::generate_from_config(&config)?;

    ui::success(&format!(
        "Symbol list is valid (root namespace '{}')",
        index.root
    ));
    ui::print_index_summary(&index, start.elapsed());

    Ok(())
}
