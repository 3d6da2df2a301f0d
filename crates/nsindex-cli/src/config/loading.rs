use crate::config::{ConfigOverrides, IndexConfig};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use std::path::Path;

/// Config file picked up from the working directory when present.
pub const CONFIG_FILE_NAME: &str = "nsindex.config.json";

/// Prefix for environment overrides (NSINDEX_INPUT, NSINDEX_GLOBAL, ...).
pub const ENV_PREFIX: &str = "NSINDEX_";

impl IndexConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        // An explicit --config must exist; the default file is optional
        let config_file = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        if let Some(path) = config_file {
            tracing::debug!(path = %path.display(), "Loading config file");
            figment = figment.merge(Json::file(path));
        }

        figment = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides));

        let config: Self = figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            value: e.to_string(),
            hint: format!("Check {} syntax and field types", CONFIG_FILE_NAME),
        })?;

        config.validate()?;
        tracing::debug!(?config, "Resolved configuration");
        Ok(config)
    }
}
