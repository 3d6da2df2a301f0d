//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::commands::utils;
use crate::config::{ConfigOverrides, IndexConfig};
use crate::error::{Result, ResultExt};
use crate::ui;
use std::io::Write;
use std::time::Instant;

/// Execute the generate command.
///
/// # Steps
///
/// 1. Resolve configuration (CLI > env > config file > defaults)
/// 2. Read the symbol list and generate the index
/// 3. Print to stdout, or write the output file (creating its directory)
///
/// Nothing is written when generation fails.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let start = Instant::now();
    let config = IndexConfig::load(&ConfigOverrides::from(&args), args.config.as_deref())?;

    let index = utils::generate_from_config(&config)?;
    if index.stats.exports == 0 {
        ui::warning("No exports were generated (no exportable symbols)");
    }

    if args.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(index.code.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    utils::ensure_parent_dir(&config.output)?;
    std::fs::write(&config.output, &index.code)
        .context(format!("Failed to write {}", config.output.display()))?;

    tracing::info!(
        output = %config.output.display(),
        root = %index.root,
        "Wrote export index"
    );
    ui::success(&format!("Generated {}", config.output.display()));
    ui::print_index_summary(&index, start.elapsed());

    Ok(())
}
