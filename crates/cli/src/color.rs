// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection priority:
//! 1. NO_COLOR env var → no color
//! 2. COLOR env var → force color
//! 3. default: color only when stdout is a TTY

use std::io::IsTerminal;
use termcolor::ColorChoice;

/// Resolve color choice from environment variables and TTY state.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` set to any value
/// (including empty) disables color. `COLOR` follows the inverse
/// convention for forcing color output.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if force_color || std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for terminal output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    use crate::pattern::HighlightColor;

    /// Highlighted match text: the user-selected color, bold.
    pub fn highlight(color: HighlightColor) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color.to_termcolor())).set_bold(true);
        spec
    }

    /// Cyan file path.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Yellow line number.
    pub fn line_number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Bold token text in explanations.
    pub fn token() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Green match count summary.
    pub fn count() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Dim grey placeholder text.
    pub fn placeholder() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Ansi256(245)));
        spec
    }

    /// Red error text.
    pub fn error() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
