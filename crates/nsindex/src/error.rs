//! Error types for export index generation

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while generating an export index
#[derive(Error, Debug, Diagnostic)]
pub enum IndexError {
    /// The symbol document does not have the expected shape
    #[error("Malformed symbol list: {reason}")]
    #[diagnostic(
        code(nsindex::malformed_input),
        help("Expected a JSON object of the form {{ \"symbols\": [{{ \"name\": ..., \"kind\": ... }}] }}")
    )]
    MalformedInput { reason: String },

    /// Two symbols resolve to different root namespaces
    #[error("Mismatching roots: {found} and {expected} (from symbol '{symbol}')")]
    #[diagnostic(
        code(nsindex::root_mismatch),
        help("All exported modules must live under the same top-level directory")
    )]
    RootMismatch {
        expected: String,
        found: String,
        symbol: String,
    },

    /// No symbol established a root namespace
    #[error("The root namespace is undefined: no symbol references a module path")]
    #[diagnostic(
        code(nsindex::root_undefined),
        help("Check that the symbol list is not empty after dropping 'member' symbols")
    )]
    RootUndefined,
}

impl IndexError {
    /// Create a MalformedInput error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for IndexError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}

/// Result type for index generation
pub type Result<T> = std::result::Result<T, IndexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_mismatch_message() {
        let err = IndexError::RootMismatch {
            expected: "ol".to_string(),
            found: "src".to_string(),
            symbol: "module:src/Map~Map".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Mismatching roots: src and ol"));
        assert!(msg.contains("module:src/Map~Map"));
    }

    #[test]
    fn test_json_error_is_malformed_input() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: IndexError = json_err.into();
        assert!(matches!(err, IndexError::MalformedInput { .. }));
    }
}
