//! Pipeline orchestration: load, synthesize imports, emit, serialize.

use serde_json::Value;

use crate::error::Result;
use crate::export::ExportForm;
use crate::format::FormatOptions;
use crate::imports::{RootNamespace, synthesize_imports};
use crate::namespace::emit_exports;
use crate::symbol::{Symbol, load_symbols, load_symbols_from_value};

/// Counts describing a generated index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Symbols kept after dropping members
    pub symbols: usize,
    pub imports: usize,
    /// Namespace bootstrap statements (excluding the root)
    pub namespaces: usize,
    pub exports: usize,
}

/// Result of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIndex {
    /// Generated JavaScript source
    pub code: String,
    /// Detected root namespace
    pub root: String,
    pub stats: IndexStats,
}

/// Generate the export index from symbol document JSON text.
///
/// # Example
///
/// ```rust
/// use nsindex::{FormatOptions, generate_index};
///
/// let json = r#"{ "symbols": [
///     { "name": "module:ol/Map~Map", "kind": "class" },
///     { "name": "module:ol/proj.transform", "kind": "function" }
/// ] }"#;
///
/// let index = generate_index(json, &FormatOptions::default())?;
/// assert_eq!(index.root, "ol");
/// assert!(index.code.contains("ol.proj.transform = _ol_proj.transform;"));
/// # Ok::<(), nsindex::IndexError>(())
/// ```
pub fn generate_index(json: &str, options: &FormatOptions) -> Result<GeneratedIndex> {
    let symbols = load_symbols(json)?;
    generate_from_symbols(symbols, options)
}

/// Generate the export index from an already parsed symbol document.
pub fn generate_index_from_value(value: Value, options: &FormatOptions) -> Result<GeneratedIndex> {
    let symbols = load_symbols_from_value(value)?;
    generate_from_symbols(symbols, options)
}

/// Generate the export index from loaded symbols.
///
/// `symbols` must already be filtered (see [`crate::load_symbols`]).
pub fn generate_from_symbols(
    symbols: Vec<Symbol>,
    options: &FormatOptions,
) -> Result<GeneratedIndex> {
    let parsed = symbols
        .into_iter()
        .map(|symbol| {
            let form = ExportForm::parse(&symbol.name)?;
            Ok((symbol, form))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut root = RootNamespace::new();
    let imports = synthesize_imports(&parsed, &mut root, options.quote_style)?;
    let emitted = emit_exports(&parsed);
    let root = root.require()?.to_string();

    let stats = IndexStats {
        symbols: parsed.len(),
        imports: imports.len(),
        namespaces: emitted.bootstraps.len(),
        exports: emitted.exports.len(),
    };

    let mut body = emitted.bootstraps;
    body.extend(emitted.exports);
    body.sort();

    let code = render(&imports, &root, options, &body);
    tracing::debug!(root = %root, bytes = code.len(), "Generated export index");

    Ok(GeneratedIndex { code, root, stats })
}

fn render(imports: &[String], root: &str, options: &FormatOptions, body: &[String]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(imports.len() + body.len() + 4);
    lines.extend(imports.iter().cloned());
    lines.push(String::new());
    lines.push(format!(
        "var {root} = {global}[{key}] = {{}};",
        global = options.global_object,
        key = options.quote_style.quote(root),
    ));
    lines.push(String::new());
    lines.extend(body.iter().cloned());
    lines.push(String::new());
    lines.join("\n")
}
