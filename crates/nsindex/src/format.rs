//! Formatting options for the generated index

use serde::{Deserialize, Serialize};

/// Quote style for module specifiers and the global property lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// Single quotes: `'./ol/Map'`
    #[default]
    Single,
    /// Double quotes: `"./ol/Map"`
    Double,
}

impl QuoteStyle {
    /// Wrap `value` in this quote style
    pub fn quote(self, value: &str) -> String {
        match self {
            QuoteStyle::Single => format!("'{}'", value),
            QuoteStyle::Double => format!("\"{}\"", value),
        }
    }
}

/// Formatting options for index generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Quote style for string literals
    pub quote_style: QuoteStyle,
    /// Global object the root namespace is attached to
    pub global_object: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            quote_style: QuoteStyle::default(),
            global_object: "window".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_styles() {
        assert_eq!(QuoteStyle::Single.quote("./ol/Map"), "'./ol/Map'");
        assert_eq!(QuoteStyle::Double.quote("./ol/Map"), "\"./ol/Map\"");
    }

    #[test]
    fn test_defaults() {
        let options = FormatOptions::default();
        assert_eq!(options.quote_style, QuoteStyle::Single);
        assert_eq!(options.global_object, "window");
    }
}
