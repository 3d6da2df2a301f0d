//! Classification of qualified symbol names into export forms.
//!
//! A symbol name is parsed once into an [`ExportForm`]; the import and
//! namespace passes match on the variant instead of re-inspecting the name.
//!
//! | name                          | form        | module       | binding   |
//! |-------------------------------|-------------|--------------|-----------|
//! | `module:ol/Map~Map`           | `Default`   | `./ol/Map`   | `$ol$Map` |
//! | `module:ol/proj.transform`    | `Named`     | `./ol/proj`  | `_ol_proj`|
//! | `ol`                          | `Unqualified` | -          | -         |
//!
//! A module reference starting with `/` (`module:/src/ol/Map`) is rooted at
//! a source directory: that first segment stays in the module path and the
//! binding (`$src$ol$Map`) but not in the public namespace path, so the
//! export is `ol.Map`.
//!
//! Named exports nested below the first property keep the namespace binding
//! and walk the properties: `module:ol/has.A.B` exports `_ol_has.A.B`, not a
//! flattened `_ol_has_A.B`.

use crate::error::{IndexError, Result};
use crate::format::QuoteStyle;

/// Prefix used by the documentation step for module references.
const MODULE_PREFIX: &str = "module:";

/// Marker that replaces [`MODULE_PREFIX`] in emitted import paths.
const RELATIVE_PREFIX: &str = "./";

/// How a module contributes to the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    /// `import binding from 'module';`
    Default,
    /// `import * as binding from 'module';`
    Namespace,
}

impl ImportKind {
    /// Separator that replaces path punctuation in binding names
    fn binding_separator(self) -> char {
        match self {
            ImportKind::Default => '$',
            ImportKind::Namespace => '_',
        }
    }
}

/// A module import derived from a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleImport {
    pub kind: ImportKind,
    /// Relative module path, e.g. `./ol/Map`
    pub module_path: String,
    /// Local binding name, e.g. `$ol$Map`
    pub binding: String,
}

impl ModuleImport {
    fn new(kind: ImportKind, reference: &str) -> Self {
        let module_path = normalize_module_path(reference);
        let binding = binding_name(&module_path, kind.binding_separator());
        Self {
            kind,
            module_path,
            binding,
        }
    }

    /// Render the import statement
    pub fn render(&self, quote: QuoteStyle) -> String {
        let from = quote.quote(&self.module_path);
        match self.kind {
            ImportKind::Default => format!("import {} from {};", self.binding, from),
            ImportKind::Namespace => format!("import * as {} from {};", self.binding, from),
        }
    }
}

/// Parsed form of a symbol name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportForm {
    /// `module:ol/Map~Map`: the module's default export
    Default {
        import: ModuleImport,
        /// Public namespace path, e.g. `["ol", "Map"]`
        namespace_path: Vec<String>,
    },
    /// `module:ol/proj.transform`: a property of the module namespace object
    Named {
        import: ModuleImport,
        /// Public namespace path, e.g. `["ol", "proj", "transform"]`
        namespace_path: Vec<String>,
        /// Property path on the imported namespace, e.g. `["transform"]`
        property_path: Vec<String>,
    },
    /// Neither `~` nor `.`: no importable module path
    Unqualified,
}

impl ExportForm {
    /// Classify a qualified symbol name.
    ///
    /// Names containing `~` are default exports (the module reference is the
    /// text before `~`). Otherwise names containing `.` are named exports (the
    /// module reference is the text before the first `.`).
    pub fn parse(name: &str) -> Result<Self> {
        if let Some((reference, _)) = name.split_once('~') {
            let import = ModuleImport::new(ImportKind::Default, reference);
            let namespace_path = namespace_segments(reference);
            ensure_segments(name, &namespace_path)?;
            Ok(ExportForm::Default {
                import,
                namespace_path,
            })
        } else if let Some((reference, property)) = name.split_once('.') {
            let import = ModuleImport::new(ImportKind::Namespace, reference);
            let module_segments = namespace_segments(reference);
            ensure_segments(name, &module_segments)?;
            let property_path = path_segments(property);
            let namespace_path = module_segments
                .into_iter()
                .chain(property_path.iter().cloned())
                .collect();
            Ok(ExportForm::Named {
                import,
                namespace_path,
                property_path,
            })
        } else {
            Ok(ExportForm::Unqualified)
        }
    }

    /// The module import this form requires, if any
    pub fn import(&self) -> Option<&ModuleImport> {
        match self {
            ExportForm::Default { import, .. } | ExportForm::Named { import, .. } => Some(import),
            ExportForm::Unqualified => None,
        }
    }

    /// Public namespace path segments (empty for unqualified names)
    pub fn namespace_path(&self) -> &[String] {
        match self {
            ExportForm::Default { namespace_path, .. }
            | ExportForm::Named { namespace_path, .. } => namespace_path,
            ExportForm::Unqualified => &[],
        }
    }

    /// Root namespace segment, the first segment of the namespace path
    pub fn root(&self) -> Option<&str> {
        self.namespace_path().first().map(String::as_str)
    }

    /// Right-hand side of the export assignment
    pub fn export_value(&self) -> Option<String> {
        match self {
            ExportForm::Default { import, .. } => Some(import.binding.clone()),
            ExportForm::Named {
                import,
                property_path,
                ..
            } => {
                let mut value = import.binding.clone();
                for segment in property_path {
                    value.push('.');
                    value.push_str(segment);
                }
                Some(value)
            }
            ExportForm::Unqualified => None,
        }
    }
}

fn strip_module_prefix(reference: &str) -> &str {
    reference.strip_prefix(MODULE_PREFIX).unwrap_or(reference)
}

/// Replace a leading `module:` with a relative path marker.
pub fn normalize_module_path(reference: &str) -> String {
    match reference.strip_prefix(MODULE_PREFIX) {
        Some(rest) => format!("{}{}", RELATIVE_PREFIX, rest),
        None => reference.to_string(),
    }
}

/// Replace every run of `.` and `/` in `module_path` with `separator`.
pub fn binding_name(module_path: &str, separator: char) -> String {
    let mut binding = String::with_capacity(module_path.len());
    let mut in_run = false;
    for c in module_path.chars() {
        if c == '.' || c == '/' {
            if !in_run {
                binding.push(separator);
                in_run = true;
            }
        } else {
            binding.push(c);
            in_run = false;
        }
    }
    binding
}

/// Public namespace segments of a module reference.
///
/// `module:/src/ol/Map` drops the leading source directory: `["ol", "Map"]`.
fn namespace_segments(reference: &str) -> Vec<String> {
    let path = strip_module_prefix(reference);
    let mut segments = path_segments(path);
    if path.starts_with('/') && !segments.is_empty() {
        segments.remove(0);
    }
    segments
}

fn path_segments(path: &str) -> Vec<String> {
    path.split(['/', '.'])
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn ensure_segments(name: &str, segments: &[String]) -> Result<()> {
    if segments.is_empty() {
        return Err(IndexError::malformed(format!(
            "symbol '{}' has an empty module path",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_export() {
        let form = ExportForm::parse("module:ol/Map~Map").unwrap();
        let import = form.import().unwrap();
        assert_eq!(import.kind, ImportKind::Default);
        assert_eq!(import.module_path, "./ol/Map");
        assert_eq!(import.binding, "$ol$Map");
        assert_eq!(form.namespace_path(), ["ol", "Map"]);
        assert_eq!(form.root(), Some("ol"));
        assert_eq!(form.export_value().as_deref(), Some("$ol$Map"));
    }

    #[test]
    fn test_named_export() {
        let form = ExportForm::parse("module:ol/proj.transform").unwrap();
        let import = form.import().unwrap();
        assert_eq!(import.kind, ImportKind::Namespace);
        assert_eq!(import.module_path, "./ol/proj");
        assert_eq!(import.binding, "_ol_proj");
        assert_eq!(form.namespace_path(), ["ol", "proj", "transform"]);
        assert_eq!(form.export_value().as_deref(), Some("_ol_proj.transform"));
    }

    #[test]
    fn test_nested_named_export_references_namespace_binding() {
        let form = ExportForm::parse("module:ol/has.DEVICE.PIXEL").unwrap();
        assert_eq!(form.namespace_path(), ["ol", "has", "DEVICE", "PIXEL"]);
        assert_eq!(form.export_value().as_deref(), Some("_ol_has.DEVICE.PIXEL"));
    }

    #[test]
    fn test_default_export_ignores_identifier_after_tilde() {
        let form = ExportForm::parse("module:ol/source/Tile~TileSource.prototype").unwrap();
        assert_eq!(form.namespace_path(), ["ol", "source", "Tile"]);
        assert_eq!(form.import().unwrap().binding, "$ol$source$Tile");
    }

    #[test]
    fn test_unqualified_name() {
        let form = ExportForm::parse("ol").unwrap();
        assert_eq!(form, ExportForm::Unqualified);
        assert!(form.import().is_none());
        assert!(form.root().is_none());
        assert!(form.export_value().is_none());
    }

    #[test]
    fn test_source_directory_is_dropped_from_namespace() {
        let form = ExportForm::parse("module:/src/ol/Map~Map").unwrap();
        let import = form.import().unwrap();
        assert_eq!(import.module_path, ".//src/ol/Map");
        assert_eq!(import.binding, "$src$ol$Map");
        assert_eq!(form.namespace_path(), ["ol", "Map"]);
        assert_eq!(form.root(), Some("ol"));
        assert_eq!(form.export_value().as_deref(), Some("$src$ol$Map"));

        let named = ExportForm::parse("module:/src/ol/proj.transform").unwrap();
        assert_eq!(named.import().unwrap().binding, "_src_ol_proj");
        assert_eq!(named.namespace_path(), ["ol", "proj", "transform"]);
        assert_eq!(
            named.export_value().as_deref(),
            Some("_src_ol_proj.transform")
        );
    }

    #[test]
    fn test_relative_module_keeps_first_segment() {
        let form = ExportForm::parse("module:src/ol/Map~Map").unwrap();
        assert_eq!(form.namespace_path(), ["src", "ol", "Map"]);
        assert_eq!(form.root(), Some("src"));
    }

    #[test]
    fn test_empty_module_path_is_malformed() {
        assert!(ExportForm::parse("module:~Map").is_err());
        assert!(ExportForm::parse("module:.foo").is_err());
        assert!(ExportForm::parse("module:/src~Src").is_err());
    }

    #[test]
    fn test_render_imports() {
        let default = ModuleImport::new(ImportKind::Default, "module:ol/Map");
        assert_eq!(
            default.render(QuoteStyle::Single),
            "import $ol$Map from './ol/Map';"
        );

        let named = ModuleImport::new(ImportKind::Namespace, "module:ol/proj");
        assert_eq!(
            named.render(QuoteStyle::Double),
            "import * as _ol_proj from \"./ol/proj\";"
        );
    }

    #[test]
    fn test_binding_name_collapses_runs() {
        assert_eq!(binding_name("./ol/format/GML", '$'), "$ol$format$GML");
        assert_eq!(binding_name("ol/x", '_'), "ol_x");
    }
}
