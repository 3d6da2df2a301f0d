//! Namespace tree construction and export assignment emission.

use indexmap::IndexMap;

use crate::export::ExportForm;
use crate::symbol::Symbol;

/// Namespace paths seen while emitting exports.
///
/// Each dotted prefix of two or more segments is recorded. A prefix needs a
/// `path = {};` bootstrap unless some symbol assigns to it directly.
#[derive(Debug, Default)]
pub struct NamespaceTree {
    paths: IndexMap<String, bool>,
}

impl NamespaceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every prefix of `segments` and return the full dotted path.
    pub fn record(&mut self, segments: &[String]) -> String {
        let Some((first, rest)) = segments.split_first() else {
            return String::new();
        };

        let mut path = first.clone();
        for (i, segment) in rest.iter().enumerate() {
            path.push('.');
            path.push_str(segment);
            let is_leaf = i == rest.len() - 1;
            let needs_bootstrap = self.paths.entry(path.clone()).or_insert(true);
            *needs_bootstrap = *needs_bootstrap && !is_leaf;
        }
        path
    }

    /// Whether `path` still needs an empty object bootstrap
    pub fn needs_bootstrap(&self, path: &str) -> bool {
        self.paths.get(path).copied().unwrap_or(false)
    }

    /// `path = {};` for every recorded path that is never assigned directly
    pub fn bootstrap_statements(&self) -> Vec<String> {
        self.paths
            .keys()
            .filter(|path| self.needs_bootstrap(path))
            .map(|path| format!("{} = {{}};", path))
            .collect()
    }
}

/// Namespace bootstraps and export assignments for one symbol list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmittedExports {
    /// `ol.source = {};` lines, in first-seen order
    pub bootstraps: Vec<String>,
    /// `ol.Map = $ol$Map;` lines, in symbol order
    pub exports: Vec<String>,
}

/// Emit the namespace tree and one assignment per exported symbol.
///
/// Instance members and unqualified names are skipped. A line identical to
/// the one emitted just before it is dropped; repeats further apart are kept.
pub fn emit_exports(symbols: &[(Symbol, ExportForm)]) -> EmittedExports {
    let mut tree = NamespaceTree::new();
    let mut exports: Vec<String> = Vec::new();

    for (symbol, form) in symbols {
        if symbol.is_instance_member() {
            continue;
        }
        let Some(value) = form.export_value() else {
            continue;
        };

        let target = tree.record(form.namespace_path());
        let line = format!("{} = {};", target, value);
        if exports.last() != Some(&line) {
            exports.push(line);
        }
    }

    let bootstraps = tree.bootstrap_statements();
    tracing::debug!(
        bootstraps = bootstraps.len(),
        exports = exports.len(),
        "Emitted namespace tree"
    );

    EmittedExports {
        bootstraps,
        exports,
    }
}
