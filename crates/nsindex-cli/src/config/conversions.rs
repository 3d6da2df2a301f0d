use nsindex::QuoteStyle;

use crate::cli::{CheckArgs, GenerateArgs};
use crate::config::ConfigOverrides;

// Conversion implementations: CLI args -> config overrides

impl From<crate::cli::QuoteStyle> for QuoteStyle {
    fn from(q: crate::cli::QuoteStyle) -> Self {
        match q {
            crate::cli::QuoteStyle::Single => QuoteStyle::Single,
            crate::cli::QuoteStyle::Double => QuoteStyle::Double,
        }
    }
}

impl From<&GenerateArgs> for ConfigOverrides {
    fn from(args: &GenerateArgs) -> Self {
        Self {
            input: args.input.clone(),
            output: args.output.clone(),
            global: args.global.clone(),
            quote: args.quote.map(Into::into),
        }
    }
}

impl From<&CheckArgs> for ConfigOverrides {
    fn from(args: &CheckArgs) -> Self {
        Self {
            input: args.input.clone(),
            ..Self::default()
        }
    }
}
