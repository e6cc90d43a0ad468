// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::fs;
use tempfile::TempDir;

fn sample(name: &str) -> SavedPattern {
    SavedPattern {
        name: name.into(),
        pattern: r"\d{4}".into(),
        case_sensitive: true,
        multiline: false,
        dotall: true,
        color: HighlightColor::Cyan,
        replace_with: "####".into(),
    }
}

#[test]
fn missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let lib = PatternLibrary::load(dir.path().join("absent.json"));
    assert!(lib.entries().is_empty());
}

#[test]
fn corrupt_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patterns.json");
    fs::write(&path, "{not json").unwrap();

    let lib = PatternLibrary::load(&path);
    assert!(lib.entries().is_empty());
}

#[test]
fn non_array_json_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patterns.json");
    fs::write(&path, r#"{"name": "x"}"#).unwrap();

    let lib = PatternLibrary::load(&path);
    assert!(lib.entries().is_empty());
}

#[test]
fn add_persists_and_reload_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patterns.json");

    let mut lib = PatternLibrary::load(&path);
    lib.add(sample("years")).unwrap();

    let reloaded = PatternLibrary::load(&path);
    let entry = reloaded.get("years").unwrap();
    assert_eq!(entry.pattern, r"\d{4}");
    assert!(entry.case_sensitive);
    assert!(entry.dotall);
    assert_eq!(entry.color, HighlightColor::Cyan);
    assert_eq!(entry.replace_with, "####");
}

#[test]
fn remove_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patterns.json");

    let mut lib = PatternLibrary::load(&path);
    lib.add(sample("a")).unwrap();
    lib.add(sample("b")).unwrap();

    let removed = lib.remove("a").unwrap();
    assert_eq!(removed.unwrap().name, "a");

    let reloaded = PatternLibrary::load(&path);
    assert!(reloaded.get("a").is_none());
    assert!(reloaded.get("b").is_some());
}

#[test]
fn remove_unknown_name_is_noop() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patterns.json");

    let mut lib = PatternLibrary::load(&path);
    assert!(lib.remove("ghost").unwrap().is_none());
    // Nothing was persisted for a no-op removal
    assert!(!path.exists());
}

#[test]
fn duplicate_names_resolve_to_first() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patterns.json");

    let mut lib = PatternLibrary::load(&path);
    let mut first = sample("dup");
    first.pattern = "first".into();
    lib.add(first).unwrap();
    lib.add(sample("dup")).unwrap();

    assert_eq!(lib.get("dup").unwrap().pattern, "first");
}

#[test]
fn saved_pattern_converts_to_pattern() {
    let p = sample("x").to_pattern();
    assert_eq!(p.pattern, r"\d{4}");
    assert!(p.case_sensitive);
    assert!(!p.multiline);
    assert!(p.dotall);
}

#[test]
fn serialized_fields_use_original_names() {
    let json = serde_json::to_string(&sample("x")).unwrap();
    for field in [
        "name",
        "pattern",
        "case_sensitive",
        "multiline",
        "dotall",
        "color",
        "replace_with",
    ] {
        assert!(json.contains(field), "missing field {field}");
    }
}

#[test]
fn missing_optional_fields_default() {
    let json = r#"[{"name": "minimal", "pattern": "x"}]"#;
    let entries: Vec<SavedPattern> = serde_json::from_str(json).unwrap();
    assert!(!entries[0].case_sensitive);
    assert_eq!(entries[0].color, HighlightColor::Yellow);
    assert_eq!(entries[0].replace_with, "");
}

#[test]
fn builtins_compile_with_default_flags() {
    for preset in BUILTIN_PATTERNS {
        let pattern = Pattern::new(preset.pattern);
        assert!(pattern.compile().is_ok(), "builtin {} must compile", preset.name);
    }
}

#[test]
fn builtin_lookup_by_name() {
    assert!(builtin("email").is_some());
    assert!(builtin("ipv4").is_some());
    assert!(builtin("nonsense").is_none());
}

#[test]
fn builtin_email_matches_an_address() {
    let m = Pattern::new(builtin("email").unwrap().pattern)
        .compile()
        .unwrap();
    let spans = m.find_all("contact us at dev@example.com today");
    assert_eq!(spans.len(), 1);
}
