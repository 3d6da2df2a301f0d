use crate::cli::parse_global;
use crate::config::IndexConfig;
use crate::error::{ConfigError, Result};
use std::path::Path;

impl IndexConfig {
    /// Validate the resolved configuration.
    pub fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_global_name(&self.global)
    }
}

fn validate_path(field: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: String::new(),
            hint: format!("'{}' must be a file path", field),
        }
        .into());
    }
    Ok(())
}

/// Validate the global object name follows JavaScript identifier rules.
pub fn validate_global_name(name: &str) -> Result<()> {
    parse_global(name).map(drop).map_err(|hint| {
        ConfigError::InvalidValue {
            field: "global".to_string(),
            value: name.to_string(),
            hint,
        }
        .into()
    })
}
