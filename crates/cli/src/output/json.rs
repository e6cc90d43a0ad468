// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed). Pretty by
//! default, single-line with `--compact`.

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::capture::CaptureTable;
use crate::output::line_col;
use crate::pattern::MatchSpan;
use crate::pattern::explain::ExplainToken;

/// One match for JSON output.
#[derive(Debug, Serialize)]
pub struct MatchRecord {
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
    pub text: String,
}

/// `find` command output.
#[derive(Debug, Serialize)]
pub struct FindOutput {
    pub timestamp: String,
    pub pattern: String,
    pub count: usize,
    pub matches: Vec<MatchRecord>,
}

impl FindOutput {
    pub fn new(pattern: &str, text: &str, spans: &[MatchSpan]) -> Self {
        let matches = spans
            .iter()
            .map(|span| {
                let (line, column) = line_col(text, span.start);
                MatchRecord {
                    start: span.start,
                    end: span.end,
                    line,
                    column,
                    text: text[span.start..span.end].to_string(),
                }
            })
            .collect();
        Self {
            timestamp: now_rfc3339(),
            pattern: pattern.to_string(),
            count: spans.len(),
            matches,
        }
    }
}

/// `explain` command output.
#[derive(Debug, Serialize)]
pub struct ExplainOutput<'a> {
    pub timestamp: String,
    pub pattern: &'a str,
    pub tokens: &'a [ExplainToken],
}

impl<'a> ExplainOutput<'a> {
    pub fn new(pattern: &'a str, tokens: &'a [ExplainToken]) -> Self {
        Self {
            timestamp: now_rfc3339(),
            pattern,
            tokens,
        }
    }
}

/// `capture` command output.
#[derive(Debug, Serialize)]
pub struct CaptureOutput {
    pub timestamp: String,
    pub pattern: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl CaptureOutput {
    pub fn new(pattern: &str, table: &CaptureTable) -> Self {
        Self {
            timestamp: now_rfc3339(),
            pattern: pattern.to_string(),
            headers: table.headers(),
            rows: table.rows.clone(),
        }
    }
}

/// Current time as RFC 3339 with second precision.
fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

/// Write a serializable value as JSON, pretty or compact.
pub fn write_json<W: Write, T: Serialize>(
    writer: &mut W,
    value: &T,
    compact: bool,
) -> std::io::Result<()> {
    let json = if compact {
        serde_json::to_string(value).map_err(std::io::Error::other)?
    } else {
        serde_json::to_string_pretty(value).map_err(std::io::Error::other)?
    };
    writeln!(writer, "{}", json)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
