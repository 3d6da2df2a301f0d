//! Symbol records and the symbol list loader.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{IndexError, Result};

/// Kind of symbols that describe data members rather than importable entities.
pub const MEMBER_KIND: &str = "member";

/// One exported entity as described by the documentation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Qualified name, e.g. `module:ol/Map~Map` or `module:ol/proj.transform`
    pub name: String,
    /// Documentation kind (`class`, `function`, `member`, ...)
    pub kind: String,
    /// Source location (`file:line`), informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            path: None,
        }
    }

    /// Whether this symbol names an instance member (`Foo#bar`)
    pub fn is_instance_member(&self) -> bool {
        self.name.contains('#')
    }

    fn is_member_kind(&self) -> bool {
        self.kind == MEMBER_KIND
    }
}

/// Parse a symbol document from JSON text.
///
/// See [`load_symbols_from_value`] for the accepted shape.
pub fn load_symbols(json: &str) -> Result<Vec<Symbol>> {
    let value: Value = serde_json::from_str(json)?;
    load_symbols_from_value(value)
}

/// Extract the importable symbols from an already parsed document.
///
/// The document must be an object with a `symbols` array. Symbols of kind
/// `member` are dropped; the remaining ones keep their input order.
pub fn load_symbols_from_value(value: Value) -> Result<Vec<Symbol>> {
    let Value::Object(mut document) = value else {
        return Err(IndexError::malformed("document is not a JSON object"));
    };

    let entries = match document.remove("symbols") {
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(IndexError::malformed("'symbols' is not an array")),
        None => return Err(IndexError::malformed("missing 'symbols' field")),
    };

    let total = entries.len();
    let mut symbols = Vec::with_capacity(total);
    for (index, entry) in entries.into_iter().enumerate() {
        let symbol: Symbol = serde_json::from_value(entry)
            .map_err(|e| IndexError::malformed(format!("symbol #{}: {}", index, e)))?;
        if symbol.name.is_empty() {
            return Err(IndexError::malformed(format!(
                "symbol #{} has an empty name",
                index
            )));
        }
        if !symbol.is_member_kind() {
            symbols.push(symbol);
        }
    }

    tracing::debug!(
        total,
        kept = symbols.len(),
        "Loaded symbol list (dropped '{}' symbols)",
        MEMBER_KIND
    );

    Ok(symbols)
}
