// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn explicit_no_color_flag_wins() {
    assert_eq!(resolve_color(true, true), ColorChoice::Never);
}

#[test]
fn force_color_flag_forces() {
    // NO_COLOR from the environment could override this in a dirty env;
    // the flag path itself must yield Always when no_color is unset.
    if std::env::var_os("NO_COLOR").is_none() {
        assert_eq!(resolve_color(true, false), ColorChoice::Always);
    }
}

#[test]
fn highlight_scheme_uses_selected_color() {
    use crate::pattern::HighlightColor;
    let spec = scheme::highlight(HighlightColor::Red);
    assert_eq!(spec.fg(), Some(&termcolor::Color::Red));
    assert!(spec.bold());
}

#[test]
fn scheme_specs_are_distinct() {
    assert_ne!(scheme::path(), scheme::line_number());
    assert_ne!(scheme::count(), scheme::error());
}
