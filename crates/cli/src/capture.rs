// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture-group extraction.
//!
//! Builds a match-by-group matrix from a compiled matcher and offers it as
//! delimited text: one row per match, one column per group index, empty
//! cells for unmatched optional groups. When the pattern declares no
//! groups, each row holds the whole match text instead.

use crate::pattern::CompiledMatcher;

/// Captured groups arranged as a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTable {
    /// Number of capture groups in the pattern (0 = whole-match rows).
    pub group_count: usize,
    /// One row per match.
    pub rows: Vec<Vec<Option<String>>>,
}

impl CaptureTable {
    /// Collect all matches of `matcher` in `text` into a table.
    pub fn collect(matcher: &CompiledMatcher, text: &str) -> Self {
        let group_count = matcher.group_count();
        let rows = matcher
            .captures_all(text)
            .into_iter()
            .map(|m| {
                if group_count == 0 {
                    vec![Some(m.text)]
                } else {
                    m.groups
                }
            })
            .collect();
        Self { group_count, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column headers: `group_1..group_N`, or `match` for whole-match rows.
    pub fn headers(&self) -> Vec<String> {
        if self.group_count == 0 {
            vec!["match".to_string()]
        } else {
            (1..=self.group_count).map(|i| format!("group_{i}")).collect()
        }
    }

    /// Serialize as CSV with a header row.
    ///
    /// Unmatched groups become empty cells. Fields containing the
    /// delimiter, quotes, or newlines are quoted with doubled inner quotes.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        write_csv_row(&mut out, self.headers().iter().map(String::as_str));
        for row in &self.rows {
            write_csv_row(&mut out, row.iter().map(|c| c.as_deref().unwrap_or("")));
        }
        out
    }
}

fn write_csv_row<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&csv_field(field));
    }
    out.push('\n');
}

/// Quote a field when it contains delimiter, quote, or newline characters.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
