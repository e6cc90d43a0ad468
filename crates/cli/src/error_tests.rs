// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[test]
fn pattern_error_display() {
    let err = Error::Pattern {
        message: "unclosed character class".into(),
    };
    assert!(err.to_string().contains("unclosed character class"));
}

#[test]
fn pattern_error_from_regex_error() {
    let regex_err = regex::Regex::new("[unclosed").unwrap_err();
    let err = Error::from(regex_err);
    assert!(matches!(err, Error::Pattern { .. }));
}

#[test]
fn io_error_includes_path() {
    let err = Error::Io {
        path: PathBuf::from("/tmp/notes.txt"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.to_string().contains("/tmp/notes.txt"));
}

#[test]
fn no_backup_names_original() {
    let err = Error::NoBackup {
        path: PathBuf::from("data.txt"),
    };
    assert!(err.to_string().contains("data.txt"));
}

#[parameterized(
    pattern = { Error::Pattern { message: "x".into() }, ExitCode::UsageError },
    argument = { Error::Argument("bad flag".into()), ExitCode::UsageError },
    library = { Error::Library { message: "x".into(), path: None }, ExitCode::UsageError },
    no_backup = { Error::NoBackup { path: PathBuf::from("f") }, ExitCode::UsageError },
    internal = { Error::Internal("bug".into()), ExitCode::InternalError },
)]
fn exit_codes(err: Error, expected: ExitCode) {
    assert_eq!(ExitCode::from(&err), expected);
}

#[test]
fn exit_code_from_io_error() {
    let err = Error::Io {
        path: PathBuf::from("f"),
        source: std::io::Error::other("disk"),
    };
    assert_eq!(ExitCode::from(&err), ExitCode::InternalError);
}
