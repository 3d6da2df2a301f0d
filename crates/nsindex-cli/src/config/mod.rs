//! Configuration for nsindex with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod conversions;
mod defaults;
mod loading;
mod validation;

use nsindex::{FormatOptions, QuoteStyle};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;
pub use loading::{CONFIG_FILE_NAME, ENV_PREFIX};

/// nsindex configuration - loaded from nsindex.config.json, env, or CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IndexConfig {
    /// Symbol list written by the documentation step
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Generated index file
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Global object the root namespace is attached to
    #[serde(default = "default_global")]
    pub global: String,

    /// Quote style for module specifiers
    #[serde(default)]
    pub quote: QuoteStyle,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            global: default_global(),
            quote: QuoteStyle::default(),
        }
    }
}

impl IndexConfig {
    /// Formatting options for the generator
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            quote_style: self.quote,
            global_object: self.global.clone(),
        }
    }
}

/// Values supplied on the command line; `None` leaves lower layers in place.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<QuoteStyle>,
}
