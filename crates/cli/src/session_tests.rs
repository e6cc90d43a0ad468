// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::fs;
use tempfile::TempDir;

fn session_with(pattern: &str, text: &str) -> SessionState {
    let mut s = SessionState::new();
    s.set_pattern(pattern);
    s.set_editor_text(text);
    s
}

#[test]
fn replace_stores_undo_snapshot() {
    let mut s = session_with(r"\d+", "a1 b22");
    s.replace_with = "#".into();

    let count = s.replace_in_editor().unwrap();
    assert_eq!(count, 2);
    assert_eq!(s.editor, "a# b#");
}

#[test]
fn undo_restores_byte_for_byte() {
    let original = "a1 b22 \u{e9}3";
    let mut s = session_with(r"\d+", original);
    s.replace_in_editor().unwrap();
    assert_ne!(s.editor, original);

    assert_eq!(s.undo(), UndoOutcome::Restored);
    assert_eq!(s.editor, original);
}

#[test]
fn second_undo_is_reported_noop() {
    let mut s = session_with(r"\d", "x1");
    s.replace_in_editor().unwrap();
    assert_eq!(s.undo(), UndoOutcome::Restored);

    let text_after_undo = s.editor.clone();
    assert_eq!(s.undo(), UndoOutcome::NothingToUndo);
    assert_eq!(s.editor, text_after_undo);
}

#[test]
fn empty_template_removes_all_matches() {
    let mut s = session_with(r"\d+", "a1 b22 c333");
    s.replace_in_editor().unwrap();
    assert_eq!(s.editor, "a b c");

    // Idempotent: re-running the same substitution finds nothing more
    let count = s.replace_in_editor().unwrap();
    assert_eq!(count, 0);
    assert_eq!(s.editor, "a b c");
}

#[test]
fn template_back_references_groups() {
    let mut s = session_with(r"(\w+)=(\d+)", "a=1 b=2");
    s.replace_with = "$2=$1".into();
    s.replace_in_editor().unwrap();
    assert_eq!(s.editor, "1=a 2=b");
}

#[test]
fn failed_compile_leaves_state_untouched() {
    let mut s = session_with("[unclosed", "text");
    s.replace_in_editor().unwrap_err();
    assert_eq!(s.editor, "text");
    assert_eq!(s.undo(), UndoOutcome::NothingToUndo);
}

#[test]
fn highlight_reports_compile_error_inline() {
    let s = session_with("[unclosed", "text");
    let r = s.highlight(HighlightColor::Yellow);
    assert_eq!(r.count, 0);
    assert!(r.markup.contains("Invalid pattern"));
}

#[test]
fn highlight_counts_matches() {
    let s = session_with("o", "foo bog");
    let r = s.highlight(HighlightColor::Yellow);
    assert_eq!(r.count, 3);
}

#[test]
fn load_file_clears_undo_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, "fresh content").unwrap();

    let mut s = session_with(r"\w+", "old");
    s.replace_in_editor().unwrap();

    s.load_file(&path, FileOrigin::Local, |_| {}).unwrap();
    assert_eq!(s.editor, "fresh content");
    assert_eq!(s.undo(), UndoOutcome::NothingToUndo);
    assert_eq!(s.file.as_ref().unwrap().origin, FileOrigin::Local);
}

#[test]
fn save_and_restore_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.txt");
    fs::write(&path, "version one").unwrap();

    let mut s = SessionState::new();
    s.load_file(&path, FileOrigin::Local, |_| {}).unwrap();
    s.set_editor_text("version two");

    let pair = s.save_to_file().unwrap().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "version two");
    assert!(pair.backup.exists());

    s.restore_backup().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "version one");
}

#[test]
fn save_without_loaded_file_errors() {
    let mut s = session_with("x", "text");
    assert!(s.save_to_file().is_err());
}

#[test]
fn restore_without_backup_errors() {
    let mut s = SessionState::new();
    assert!(s.restore_backup().is_err());
}
