//! Shared utilities for command implementations.

use crate::config::IndexConfig;
use crate::error::{CliError, Result, ResultExt};
use nsindex::GeneratedIndex;
use std::fs;
use std::path::Path;

/// Read the symbol list and run the generator with `config`.
pub fn generate_from_config(config: &IndexConfig) -> Result<GeneratedIndex> {
    tracing::debug!(input = %config.input.display(), "Reading symbol list");
    let json = fs::read_to_string(&config.input).with_path(&config.input)?;
    let index = nsindex::generate_index(&json, &config.format_options())?;
    Ok(index)
}

/// Ensure the parent directory of `file` exists.
///
/// # Errors
///
/// Returns I/O errors if directory creation fails, or an error if the
/// parent exists but is not a directory.
pub fn ensure_parent_dir(file: &Path) -> Result<()> {
    let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    if !parent.exists() {
        fs::create_dir_all(parent)?;
    } else if !parent.is_dir() {
        return Err(CliError::Custom(format!(
            "Output directory exists but is not a directory: {}",
            parent.display()
        )));
    }

    Ok(())
}
