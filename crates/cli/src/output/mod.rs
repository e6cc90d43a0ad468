// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for match, explanation, and capture results.

pub mod json;
pub mod text;

/// Resolve a byte offset to a 1-based (line, column) pair.
///
/// Columns count characters within the line, not bytes.
pub fn line_col(text: &str, offset: usize) -> (u32, u32) {
    let prefix = &text[..offset];
    let line = memchr::memchr_iter(b'\n', prefix.as_bytes()).count() as u32 + 1;
    let line_start = memchr::memrchr(b'\n', prefix.as_bytes()).map_or(0, |i| i + 1);
    let column = text[line_start..offset].chars().count() as u32 + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn line_col_start_of_text() {
        assert_eq!(line_col("abc", 0), (1, 1));
    }

    #[test]
    fn line_col_counts_lines() {
        let text = "a\nbc\ndef";
        assert_eq!(line_col(text, 2), (2, 1)); // 'b'
        assert_eq!(line_col(text, 3), (2, 2)); // 'c'
        assert_eq!(line_col(text, 5), (3, 1)); // 'd'
    }

    #[test]
    fn line_col_counts_chars_not_bytes() {
        let text = "é1";
        // 'é' is two bytes; '1' starts at byte 2 but is column 2
        assert_eq!(line_col(text, 2), (1, 2));
    }
}
