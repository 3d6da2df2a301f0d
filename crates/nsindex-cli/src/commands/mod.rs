//! Command implementations for the nsindex CLI.
//!
//! - [`generate`] - Write the export index
//! - [`check`] - Validate a symbol list without writing
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod check;
pub mod generate;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use generate::execute as generate_execute;
