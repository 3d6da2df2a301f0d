//! Import synthesis and root namespace tracking.

use std::collections::BTreeSet;

use crate::error::{IndexError, Result};
use crate::export::ExportForm;
use crate::format::QuoteStyle;
use crate::symbol::Symbol;

/// Root namespace detected while processing one symbol list.
///
/// The first symbol with a module path fixes the root; every later one must
/// agree with it. A fresh value is created for every generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootNamespace {
    root: Option<String>,
}

impl RootNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the root implied by `symbol`.
    pub fn observe(&mut self, candidate: &str, symbol: &Symbol) -> Result<()> {
        match &self.root {
            Some(root) if root != candidate => Err(IndexError::RootMismatch {
                expected: root.clone(),
                found: candidate.to_string(),
                symbol: symbol.name.clone(),
            }),
            Some(_) => Ok(()),
            None => {
                tracing::debug!(root = candidate, symbol = %symbol.name, "Detected root namespace");
                self.root = Some(candidate.to_string());
                Ok(())
            }
        }
    }

    pub fn get(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// The detected root, or [`IndexError::RootUndefined`]
    pub fn require(&self) -> Result<&str> {
        self.get().ok_or(IndexError::RootUndefined)
    }
}

/// Build the sorted, deduplicated import statements for `symbols`.
///
/// Instance members still take part: they share their module with the
/// owning class, and their module path is validated against the root.
pub fn synthesize_imports(
    symbols: &[(Symbol, ExportForm)],
    root: &mut RootNamespace,
    quote: QuoteStyle,
) -> Result<Vec<String>> {
    let mut imports = BTreeSet::new();

    for (symbol, form) in symbols {
        let Some(import) = form.import() else {
            tracing::trace!(symbol = %symbol.name, "No module path, skipping import");
            continue;
        };
        if let Some(candidate) = form.root() {
            root.observe(candidate, symbol)?;
        }
        imports.insert(import.render(quote));
    }

    tracing::debug!(count = imports.len(), "Synthesized imports");
    Ok(imports.into_iter().collect())
}
