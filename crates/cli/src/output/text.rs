// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal text output using termcolor.
//!
//! The highlighted view interleaves plain gap text with styled match text,
//! walking the same ordered span list the markup renderer uses, so the two
//! views always agree on what matched.

use std::io;

use termcolor::{ColorSpec, WriteColor};

use crate::capture::CaptureTable;
use crate::color::scheme;
use crate::output::line_col;
use crate::pattern::explain::ExplainToken;
use crate::pattern::{HighlightColor, MatchSpan};

/// Write `text` with every span styled in the highlight color.
pub fn write_highlighted<W: WriteColor>(
    out: &mut W,
    text: &str,
    spans: &[MatchSpan],
    color: HighlightColor,
) -> io::Result<()> {
    let mut last_end = 0;
    for span in spans {
        write!(out, "{}", &text[last_end..span.start])?;
        out.set_color(&scheme::highlight(color))?;
        write!(out, "{}", &text[span.start..span.end])?;
        out.reset()?;
        last_end = span.end;
    }
    writeln!(out, "{}", &text[last_end..])
}

/// Write the match count summary line.
pub fn write_count<W: WriteColor>(out: &mut W, count: usize) -> io::Result<()> {
    let spec: ColorSpec = if count > 0 {
        scheme::count()
    } else {
        scheme::placeholder()
    };
    out.set_color(&spec)?;
    let noun = if count == 1 { "match" } else { "matches" };
    writeln!(out, "{count} {noun} found")?;
    out.reset()
}

/// Write one `line:col  text` row per match.
pub fn write_match_list<W: WriteColor>(
    out: &mut W,
    text: &str,
    spans: &[MatchSpan],
) -> io::Result<()> {
    for span in spans {
        let (line, col) = line_col(text, span.start);
        out.set_color(&scheme::line_number())?;
        write!(out, "{line}:{col}")?;
        out.reset()?;
        writeln!(out, "  {}", &text[span.start..span.end])?;
    }
    Ok(())
}

/// Write explanation tokens, one per line: the consumed text, then the
/// description.
pub fn write_explanation<W: WriteColor>(out: &mut W, tokens: &[ExplainToken]) -> io::Result<()> {
    let width = tokens.iter().map(|t| t.text.len()).max().unwrap_or(0);
    for token in tokens {
        out.set_color(&scheme::token())?;
        write!(out, "  {:width$}", token.text)?;
        out.reset()?;
        writeln!(out, "  {}", token.description)?;
    }
    Ok(())
}

/// Write a capture table with aligned columns.
pub fn write_capture_table<W: WriteColor>(out: &mut W, table: &CaptureTable) -> io::Result<()> {
    if table.is_empty() {
        out.set_color(&scheme::placeholder())?;
        writeln!(out, "No matches found.")?;
        return out.reset();
    }

    let headers = table.headers();
    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.as_deref().unwrap_or("").chars().count();
            if len > widths[i] {
                widths[i] = len;
            }
        }
    }

    out.set_color(&scheme::token())?;
    for (i, header) in headers.iter().enumerate() {
        write!(out, "{:width$}  ", header, width = widths[i])?;
    }
    writeln!(out)?;
    out.reset()?;

    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            write!(out, "{:width$}  ", cell.as_deref().unwrap_or(""), width = widths[i])?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write an inline pattern-compilation error.
pub fn write_pattern_error<W: WriteColor>(out: &mut W, message: &str) -> io::Result<()> {
    out.set_color(&scheme::error())?;
    writeln!(out, "Invalid pattern: {message}")?;
    out.reset()
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
