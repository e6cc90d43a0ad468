// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markup rendering of match highlights.
//!
//! Produces escaped HTML in which every non-overlapping match is wrapped in
//! a highlight marker and everything else appears verbatim. Escaping is a
//! security contract, not cosmetics: arbitrary user text and arbitrary
//! matched substrings must never be interpretable as structural markup.

use crate::pattern::{CompiledMatcher, HighlightColor};

/// Placeholder markup when the pattern matches nothing.
pub const NO_MATCHES: &str = "<p class=\"placeholder\">No matches found.</p>";

/// Rendered markup plus the number of matches it highlights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub markup: String,
    pub count: usize,
}

/// Escape markup-significant characters (`& < > " '`).
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Invert [`escape_markup`]. `&amp;` is decoded last so that escaped
/// sequences in the original text survive the round trip.
pub fn unescape_markup(markup: &str) -> String {
    markup
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

/// Render `text` with every match of `matcher` wrapped in a highlight
/// marker carrying `color`.
///
/// Walks the ordered non-overlapping match list, escaping the gap before
/// each match, then the match itself inside the marker, then the remainder
/// after the final match. Zero matches yields [`NO_MATCHES`] and count 0.
pub fn render_markup(matcher: &CompiledMatcher, text: &str, color: HighlightColor) -> Rendered {
    let matches = matcher.find_all(text);
    if matches.is_empty() {
        return Rendered {
            markup: NO_MATCHES.to_string(),
            count: 0,
        };
    }

    let mut body = String::with_capacity(text.len() + matches.len() * 48);
    let mut last_end = 0;
    for m in &matches {
        body.push_str(&escape_markup(&text[last_end..m.start]));
        body.push_str(&format!(
            "<mark style=\"background-color:{};\">{}</mark>",
            color.css_name(),
            escape_markup(&text[m.start..m.end])
        ));
        last_end = m.end;
    }
    body.push_str(&escape_markup(&text[last_end..]));

    Rendered {
        markup: format!("<div style=\"white-space:pre-wrap;\">{body}</div>"),
        count: matches.len(),
    }
}

/// Fixed error-style markup for a failed pattern compilation.
///
/// The engine message is escaped like any other untrusted text.
pub fn render_error_markup(message: &str) -> String {
    format!(
        "<p class=\"error\">Invalid pattern: {}</p>",
        escape_markup(message)
    )
}

/// Strip the highlight wrappers from rendered markup, leaving only the
/// escaped text. Used to verify the escaping round trip.
pub fn strip_markers(markup: &str) -> String {
    let mut out = markup.to_string();
    if let Some(inner) = out
        .strip_prefix("<div style=\"white-space:pre-wrap;\">")
        .and_then(|s| s.strip_suffix("</div>"))
    {
        out = inner.to_string();
    }
    while let Some(start) = out.find("<mark ") {
        let Some(tag_end) = out[start..].find('>') else {
            break;
        };
        out.replace_range(start..start + tag_end + 1, "");
    }
    out.replace("</mark>", "")
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
