// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use clap::Parser;
use tempfile::TempDir;

use crate::library::SavedPattern;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

fn empty_library() -> (TempDir, PatternLibrary) {
    let dir = TempDir::new().unwrap();
    let lib = PatternLibrary::load(dir.path().join("patterns.json"));
    (dir, lib)
}

#[test]
fn find_parses_pattern_and_file() {
    let cli = parse(&["rxpad", "find", r"\d+", "notes.txt"]);
    let Some(Command::Find(args)) = cli.command else {
        panic!("expected find");
    };
    assert_eq!(args.pattern.pattern.as_deref(), Some(r"\d+"));
    assert_eq!(args.file.as_deref(), Some(std::path::Path::new("notes.txt")));
}

#[test]
fn pattern_flags_default_to_insensitive() {
    let cli = parse(&["rxpad", "find", "x"]);
    let Some(Command::Find(args)) = cli.command else {
        panic!("expected find");
    };
    let (_, lib) = empty_library();
    let (pattern, template) = args.pattern.resolve(&lib).unwrap();
    assert!(!pattern.case_sensitive);
    assert!(!pattern.multiline);
    assert_eq!(pattern.color, HighlightColor::Yellow);
    assert!(template.is_none());
}

#[test]
fn flags_carry_through_resolve() {
    let cli = parse(&[
        "rxpad",
        "find",
        "--case-sensitive",
        "--multiline",
        "--color",
        "red",
        "x",
    ]);
    let Some(Command::Find(args)) = cli.command else {
        panic!("expected find");
    };
    let (_, lib) = empty_library();
    let (pattern, _) = args.pattern.resolve(&lib).unwrap();
    assert!(pattern.case_sensitive);
    assert!(pattern.multiline);
    assert_eq!(pattern.color, HighlightColor::Red);
}

#[test]
fn resolve_without_any_source_errors() {
    let cli = parse(&["rxpad", "find"]);
    let Some(Command::Find(args)) = cli.command else {
        panic!("expected find");
    };
    let (_, lib) = empty_library();
    assert!(args.pattern.resolve(&lib).is_err());
}

#[test]
fn builtin_resolves_preset() {
    let cli = parse(&["rxpad", "find", "--builtin", "ipv4"]);
    let Some(Command::Find(args)) = cli.command else {
        panic!("expected find");
    };
    let (_, lib) = empty_library();
    let (pattern, _) = args.pattern.resolve(&lib).unwrap();
    assert!(pattern.pattern.contains(r"\d{1,3}"));
}

#[test]
fn unknown_builtin_errors() {
    let cli = parse(&["rxpad", "find", "--builtin", "nope"]);
    let Some(Command::Find(args)) = cli.command else {
        panic!("expected find");
    };
    let (_, lib) = empty_library();
    assert!(args.pattern.resolve(&lib).is_err());
}

#[test]
fn saved_pattern_supplies_flags_and_template() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patterns.json");
    let mut lib = PatternLibrary::load(&path);
    lib.add(SavedPattern {
        name: "years".into(),
        pattern: r"\d{4}".into(),
        case_sensitive: true,
        multiline: false,
        dotall: false,
        color: HighlightColor::Green,
        replace_with: "YYYY".into(),
    })
    .unwrap();

    let cli = parse(&["rxpad", "replace", "--saved", "years"]);
    let Some(Command::Replace(args)) = cli.command else {
        panic!("expected replace");
    };
    let (pattern, template) = args.pattern.resolve(&lib).unwrap();
    assert_eq!(pattern.pattern, r"\d{4}");
    assert!(pattern.case_sensitive);
    assert_eq!(pattern.color, HighlightColor::Green);
    assert_eq!(template.as_deref(), Some("YYYY"));
}

#[test]
fn saved_conflicts_with_positional_pattern() {
    assert!(Cli::try_parse_from(["rxpad", "find", "--saved", "x", "pat"]).is_err());
}

#[test]
fn explicit_color_overrides_saved_color() {
    let dir = TempDir::new().unwrap();
    let mut lib = PatternLibrary::load(dir.path().join("p.json"));
    lib.add(SavedPattern {
        name: "p".into(),
        pattern: "x".into(),
        case_sensitive: false,
        multiline: false,
        dotall: false,
        color: HighlightColor::Green,
        replace_with: String::new(),
    })
    .unwrap();

    let cli = parse(&["rxpad", "find", "--saved", "p", "--color", "blue"]);
    let Some(Command::Find(args)) = cli.command else {
        panic!("expected find");
    };
    let (pattern, _) = args.pattern.resolve(&lib).unwrap();
    assert_eq!(pattern.color, HighlightColor::Blue);
}

#[test]
fn in_place_requires_file() {
    assert!(Cli::try_parse_from(["rxpad", "replace", "x", "y", "--in-place"]).is_err());
}

#[test]
fn library_save_parses_flags() {
    let cli = parse(&[
        "rxpad",
        "library",
        "save",
        "years",
        r"\d{4}",
        "--replace-with",
        "####",
        "--dotall",
    ]);
    let Some(Command::Library(args)) = cli.command else {
        panic!("expected library");
    };
    let LibraryAction::Save(save) = args.action else {
        panic!("expected save");
    };
    assert_eq!(save.name, "years");
    assert_eq!(save.replace_with, "####");
    assert!(save.dotall);
    assert!(!save.case_sensitive);
}

#[test]
fn library_flag_is_global() {
    let cli = parse(&["rxpad", "library", "list", "-L", "/tmp/custom.json"]);
    assert_eq!(
        cli.library.as_deref(),
        Some(std::path::Path::new("/tmp/custom.json"))
    );
}
