//! Namespaced JavaScript export index generation
//!
//! This crate turns the symbol list written by a documentation step
//! (`{ "symbols": [{ "name", "kind", "path" }] }`) into a JavaScript entry
//! file that imports every documented module and re-publishes its exports
//! under a single global namespace object.
//!
//! # Pipeline
//!
//! - **Loading** ([`load_symbols`]) - parse the document, drop `member` symbols
//! - **Import synthesis** ([`synthesize_imports`]) - one sorted import per module,
//!   root namespace validation
//! - **Namespace emission** ([`emit_exports`]) - namespace bootstraps and export
//!   assignments
//! - **Orchestration** ([`generate_index`]) - combine everything into one buffer
//!
//! # Example
//!
//! ```rust
//! use nsindex::{FormatOptions, generate_index};
//!
//! let json = r#"{ "symbols": [
//!     { "name": "module:ol/Map~Map", "kind": "class" },
//!     { "name": "module:ol/layer/Tile~TileLayer", "kind": "class" }
//! ] }"#;
//!
//! let index = generate_index(json, &FormatOptions::default())?;
//! assert!(index.code.contains("import $ol$Map from './ol/Map';"));
//! assert!(index.code.contains("var ol = window['ol'] = {};"));
//! assert!(index.code.contains("ol.layer = {};"));
//! assert!(index.code.contains("ol.layer.Tile = $ol$layer$Tile;"));
//! # Ok::<(), nsindex::IndexError>(())
//! ```

mod error;
mod export;
mod format;
mod generator;
mod imports;
mod namespace;
mod symbol;

pub use error::{IndexError, Result};
pub use export::{ExportForm, ImportKind, ModuleImport, binding_name, normalize_module_path};
pub use format::{FormatOptions, QuoteStyle};
pub use generator::{
    GeneratedIndex, IndexStats, generate_from_symbols, generate_index, generate_index_from_value,
};
pub use imports::{RootNamespace, synthesize_imports};
pub use namespace::{EmittedExports, NamespaceTree, emit_exports};
pub use symbol::{MEMBER_KIND, Symbol, load_symbols, load_symbols_from_value};
