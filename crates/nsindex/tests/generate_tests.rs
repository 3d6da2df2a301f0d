//! End-to-end tests for index generation against fixtures

use nsindex::{FormatOptions, IndexError, IndexStats, generate_index};
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

fn generate(json: &str) -> nsindex::Result<String> {
    generate_index(json, &FormatOptions::default()).map(|index| index.code)
}

#[test]
fn test_fixture_matches_expected_output() {
    let index = generate_index(&read_fixture("info.json"), &FormatOptions::default()).unwrap();

    assert_eq!(index.code, read_fixture("index.js"));
    assert_eq!(index.root, "ol");
    assert_eq!(
        index.stats,
        IndexStats {
            symbols: 13,
            imports: 10,
            namespaces: 5,
            exports: 11,
        }
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let json = read_fixture("info.json");
    let first = generate(&json).unwrap();
    let second = generate(&json).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_root_does_not_leak_between_runs() {
    let ol = r#"{ "symbols": [{ "name": "module:ol/Map~Map", "kind": "class" }] }"#;
    let other = r#"{ "symbols": [{ "name": "module:src/ol/Map~Map", "kind": "class" }] }"#;

    assert!(generate(ol).unwrap().contains("var ol = window['ol'] = {};"));
    assert!(generate(other).unwrap().contains("var src = window['src'] = {};"));
}

#[test]
fn test_default_and_named_example() {
    let json = r#"{ "symbols": [
        { "name": "module:ol/Map~Map", "kind": "class" },
        { "name": "module:ol/proj.transform", "kind": "function" }
    ] }"#;

    let code = generate(json).unwrap();
    assert_eq!(
        code,
        "import $ol$Map from './ol/Map';\n\
         import * as _ol_proj from './ol/proj';\n\
         \n\
         var ol = window['ol'] = {};\n\
         \n\
         ol.Map = $ol$Map;\n\
         ol.proj = {};\n\
         ol.proj.transform = _ol_proj.transform;\n"
    );
}

#[test]
fn test_source_directory_module_paths() {
    let json = r#"{ "symbols": [
        { "name": "module:/src/ol/Map~Map", "kind": "class" },
        { "name": "module:/src/ol/proj.transform", "kind": "function" }
    ] }"#;

    let index = generate_index(json, &FormatOptions::default()).unwrap();
    assert_eq!(index.root, "ol");
    assert_eq!(
        index.code,
        "import $src$ol$Map from './/src/ol/Map';\n\
         import * as _src_ol_proj from './/src/ol/proj';\n\
         \n\
         var ol = window['ol'] = {};\n\
         \n\
         ol.Map = $src$ol$Map;\n\
         ol.proj = {};\n\
         ol.proj.transform = _src_ol_proj.transform;\n"
    );
}

#[test]
fn test_mismatched_second_segment_fails() {
    let json = r#"{ "symbols": [
        { "name": "module:/src/ol/Map~Map", "kind": "class" },
        { "name": "module:/src/other/View~View", "kind": "class" }
    ] }"#;

    match generate(json).unwrap_err() {
        IndexError::RootMismatch {
            expected,
            found,
            symbol,
        } => {
            assert_eq!(expected, "ol");
            assert_eq!(found, "other");
            assert_eq!(symbol, "module:/src/other/View~View");
        }
        other => panic!("expected RootMismatch, got {other:?}"),
    }
}

#[test]
fn test_leaf_path_is_not_bootstrapped() {
    let json = r#"{ "symbols": [
        { "name": "module:ol/layer/Group~LayerGroup", "kind": "class" },
        { "name": "module:ol/layer~layer", "kind": "class" }
    ] }"#;

    let code = generate(json).unwrap();
    assert!(code.contains("ol.layer = $ol$layer;"));
    assert!(!code.contains("ol.layer = {};"));
}

#[test]
fn test_instance_member_is_never_exported() {
    let json = r#"{ "symbols": [
        { "name": "module:ol/Map~Map", "kind": "class" },
        { "name": "module:ol/Map~Map#render", "kind": "function" }
    ] }"#;

    let code = generate(json).unwrap();
    assert!(!code.contains("render"));
    assert_eq!(code.matches("ol.Map = $ol$Map;").count(), 1);
}

#[test]
fn test_instance_member_takes_part_in_root_validation() {
    let json = r#"{ "symbols": [
        { "name": "module:ol/Map~Map", "kind": "class" },
        { "name": "module:geo/Map~Map#render", "kind": "function" }
    ] }"#;

    let err = generate(json).unwrap_err();
    assert!(matches!(err, IndexError::RootMismatch { .. }));
}

#[test]
fn test_mismatched_root_fails() {
    let json = r#"{ "symbols": [
        { "name": "module:ol/Map~Map", "kind": "class" },
        { "name": "module:src/proj.transform", "kind": "function" }
    ] }"#;

    match generate(json).unwrap_err() {
        IndexError::RootMismatch {
            expected, found, ..
        } => {
            assert_eq!(expected, "ol");
            assert_eq!(found, "src");
        }
        other => panic!("expected RootMismatch, got {other:?}"),
    }
}

#[test]
fn test_only_unqualified_symbols_leave_root_undefined() {
    let json = r#"{ "symbols": [{ "name": "olx", "kind": "namespace" }] }"#;
    assert!(matches!(generate(json), Err(IndexError::RootUndefined)));

    let empty = r#"{ "symbols": [] }"#;
    assert!(matches!(generate(empty), Err(IndexError::RootUndefined)));
}

#[test]
fn test_malformed_documents() {
    for json in [r#"{}"#, r#"{ "symbols": "ol" }"#, r#"[1, 2]"#, "{ nope"] {
        assert!(
            matches!(generate(json), Err(IndexError::MalformedInput { .. })),
            "expected MalformedInput for {json}"
        );
    }
}

#[test]
fn test_non_consecutive_duplicates_are_kept() {
    let json = r#"{ "symbols": [
        { "name": "module:ol/Map~Map", "kind": "class" },
        { "name": "module:ol/View~View", "kind": "class" },
        { "name": "module:ol/Map~Map", "kind": "class" }
    ] }"#;

    let code = generate(json).unwrap();
    assert_eq!(code.matches("ol.Map = $ol$Map;").count(), 2);
}
