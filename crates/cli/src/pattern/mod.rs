// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation and non-overlapping match finding.
//!
//! A [`Pattern`] is a regex string plus compilation flags and a display
//! color. Compiling yields a [`CompiledMatcher`] which exposes left-to-right
//! non-overlapping find, capture extraction, and template substitution.

pub mod explain;

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Highlight colors available for match display.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    #[default]
    Yellow,
    Red,
    Green,
    Cyan,
    Magenta,
    Blue,
}

impl HighlightColor {
    /// CSS color name used in rendered markup.
    pub fn css_name(&self) -> &'static str {
        match self {
            HighlightColor::Yellow => "yellow",
            HighlightColor::Red => "red",
            HighlightColor::Green => "green",
            HighlightColor::Cyan => "cyan",
            HighlightColor::Magenta => "magenta",
            HighlightColor::Blue => "blue",
        }
    }

    pub fn to_termcolor(self) -> termcolor::Color {
        match self {
            HighlightColor::Yellow => termcolor::Color::Yellow,
            HighlightColor::Red => termcolor::Color::Red,
            HighlightColor::Green => termcolor::Color::Green,
            HighlightColor::Cyan => termcolor::Color::Cyan,
            HighlightColor::Magenta => termcolor::Color::Magenta,
            HighlightColor::Blue => termcolor::Color::Blue,
        }
    }
}

/// A regex string plus compilation flags and display color.
///
/// Immutable once compiled; callers build a fresh `Pattern` whenever the
/// string or any flag changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    /// The raw regex source.
    pub pattern: String,

    /// Match case-sensitively (default: insensitive).
    pub case_sensitive: bool,

    /// `^`/`$` match at line boundaries, not just string boundaries.
    pub multiline: bool,

    /// `.` also matches newlines.
    pub dotall: bool,

    /// Color used when rendering matches.
    pub color: HighlightColor,
}

impl Pattern {
    /// Create a pattern with default flags (case-insensitive, single-line).
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Self::default()
        }
    }

    /// Compile into a matcher, honoring all flags.
    pub fn compile(&self) -> Result<CompiledMatcher> {
        let regex = RegexBuilder::new(&self.pattern)
            .case_insensitive(!self.case_sensitive)
            .multi_line(self.multiline)
            .dot_matches_new_line(self.dotall)
            .build()?;
        Ok(CompiledMatcher { regex })
    }
}

/// One occurrence of a pattern in text.
///
/// Offsets are byte offsets into the UTF-8 input. Spans produced by
/// [`CompiledMatcher::find_all`] are non-overlapping and ordered by
/// ascending start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset where the match ends (exclusive).
    pub end: usize,
}

/// Captured groups for one match, in declaration order.
///
/// Unmatched optional groups are `None`. When the pattern has no groups,
/// `groups` is empty and `text` holds the whole match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCaptures {
    /// Span of the whole match.
    pub span: MatchSpan,
    /// The whole matched text.
    pub text: String,
    /// Group substrings in declaration order.
    pub groups: Vec<Option<String>>,
}

/// A compiled pattern ready for matching.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    regex: regex::Regex,
}

impl CompiledMatcher {
    /// Number of capture groups declared in the pattern.
    pub fn group_count(&self) -> usize {
        // captures_len counts the implicit whole-match group 0
        self.regex.captures_len() - 1
    }

    /// Find all non-overlapping matches, left to right.
    pub fn find_all(&self, text: &str) -> Vec<MatchSpan> {
        self.regex
            .find_iter(text)
            .map(|m| MatchSpan {
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }

    /// Find all matches with their captured groups.
    pub fn captures_all(&self, text: &str) -> Vec<MatchCaptures> {
        self.regex
            .captures_iter(text)
            .map(|caps| {
                // Group 0 always participates in a match
                let whole = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or((0, 0));
                let groups = (1..caps.len())
                    .map(|i| caps.get(i).map(|g| g.as_str().to_string()))
                    .collect();
                MatchCaptures {
                    span: MatchSpan {
                        start: whole.0,
                        end: whole.1,
                    },
                    text: text[whole.0..whole.1].to_string(),
                    groups,
                }
            })
            .collect()
    }

    /// Substitute every non-overlapping match with the replacement template.
    ///
    /// The template may reference groups positionally (`$1`, `${2}`).
    pub fn substitute(&self, text: &str, template: &str) -> String {
        self.regex.replace_all(text, template).into_owned()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
