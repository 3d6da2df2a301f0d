use clap::ValueEnum;

/// Quote style for generated string literals
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum QuoteStyle {
    /// Single quotes: import $ol$Map from './ol/Map';
    #[value(name = "single")]
    Single,

    /// Double quotes: import $ol$Map from "./ol/Map";
    #[value(name = "double")]
    Double,
}
