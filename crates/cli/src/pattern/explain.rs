// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort pattern explanation.
//!
//! [`explain`] walks a pattern string once, left to right, and emits one
//! human-readable token per recognized syntactic unit. It never fails and
//! never validates: malformed patterns degrade to literal-character tokens.
//! Rules are checked in a fixed priority order; the cursor strictly
//! increases on every iteration, so the scan always terminates.
//!
//! This is a heuristic, not a parser. Nested structure, escaped brackets
//! inside character sets, and dialect subtleties are not modeled.

use serde::Serialize;

/// Classification of one explained unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Two-character escape class like `\d` or `\b`.
    EscapeClass,
    /// `^` or `$`.
    Anchor,
    /// The `.` wildcard.
    AnyChar,
    /// `*`, `+`, or `?`.
    Quantifier,
    /// A `?` directly after another quantifier.
    LazyModifier,
    /// `{m}`, `{m,}`, or `{m,n}`.
    BraceQuantifier,
    /// `(`, `(?:`, or a lookaround prefix.
    GroupOpen,
    /// `)`.
    GroupClose,
    /// `[` or `[^`.
    SetOpen,
    /// `]`.
    SetClose,
    /// `|`.
    Alternation,
    /// Anything else, consumed one character at a time.
    Literal,
    /// Placeholder emitted for an empty pattern.
    Empty,
}

/// One recognized unit of a pattern string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainToken {
    pub kind: TokenKind,
    /// The substring this token consumed.
    pub text: String,
    /// Fixed human-readable description.
    pub description: String,
}

impl ExplainToken {
    fn new(kind: TokenKind, text: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            description: description.into(),
        }
    }
}

/// Two-character escape classes with fixed descriptions.
const ESCAPE_CLASSES: &[(&str, &str)] = &[
    (r"\d", "Digit: matches any digit from 0 to 9."),
    (r"\D", "Not a digit: matches any character that is not a digit."),
    (r"\w", "Word character: matches any letter, digit, or underscore."),
    (
        r"\W",
        "Not a word character: matches any character that is not a letter, digit, or underscore.",
    ),
    (
        r"\s",
        "Whitespace: matches any whitespace character (space, tab, newline).",
    ),
    (
        r"\S",
        "Not whitespace: matches any character that is not whitespace.",
    ),
    (
        r"\b",
        "Word boundary: asserts a position between a word character and a non-word character.",
    ),
    (
        r"\B",
        "Not a word boundary: asserts a position that is not a word boundary.",
    ),
];

/// Single-character tokens with fixed descriptions.
const SIMPLE_TOKENS: &[(char, TokenKind, &str)] = &[
    (
        '.',
        TokenKind::AnyChar,
        "Any character: matches any single character except a newline (unless dotall is set).",
    ),
    (
        '^',
        TokenKind::Anchor,
        "Start of string or line: asserts the position at the start of the input (or of a line in multiline mode).",
    ),
    (
        '$',
        TokenKind::Anchor,
        "End of string or line: asserts the position at the end of the input (or of a line in multiline mode).",
    ),
    (
        '*',
        TokenKind::Quantifier,
        "Zero or more: the preceding element may occur any number of times, including none.",
    ),
    (
        '+',
        TokenKind::Quantifier,
        "One or more: the preceding element must occur at least once.",
    ),
    (
        '?',
        TokenKind::Quantifier,
        "Zero or one: the preceding element is optional.",
    ),
    (
        ')',
        TokenKind::GroupClose,
        "End group: closes the current group.",
    ),
    (
        '|',
        TokenKind::Alternation,
        "Alternation: matches the expression before or after the bar.",
    ),
    (
        ']',
        TokenKind::SetClose,
        "End character set: closes the character set.",
    ),
];

/// Group-open prefixes, longest first.
const GROUP_PREFIXES: &[(&str, &str)] = &[
    (
        "(?<=",
        "Lookbehind: asserts that what precedes this position matches, without consuming characters.",
    ),
    (
        "(?<!",
        "Negative lookbehind: asserts that what precedes this position does not match.",
    ),
    (
        "(?:",
        "Non-capturing group: groups tokens together without creating a capture group.",
    ),
    (
        "(?=",
        "Lookahead: asserts that what follows this position matches, without consuming characters.",
    ),
    (
        "(?!",
        "Negative lookahead: asserts that what follows this position does not match.",
    ),
    (
        "(?",
        "Conditional or extension group: asserts a condition without consuming characters.",
    ),
    (
        "(",
        "Capturing group: groups tokens together and captures the matched substring.",
    ),
];

/// Explain a pattern string, one token per recognized unit.
///
/// Total over all inputs; an empty pattern yields a single
/// [`TokenKind::Empty`] placeholder.
pub fn explain(pattern: &str) -> Vec<ExplainToken> {
    let mut tokens = Vec::new();
    let mut rest = pattern;

    while !rest.is_empty() {
        let token = next_token(rest, tokens.last());
        rest = &rest[token.text.len()..];
        tokens.push(token);
    }

    if tokens.is_empty() {
        tokens.push(ExplainToken::new(
            TokenKind::Empty,
            "",
            "Nothing to explain: the pattern is empty.",
        ));
    }

    tokens
}

/// Produce the next token from the head of `rest`.
///
/// Rules are tried in priority order; the literal fallback always applies,
/// so this consumes at least one character.
fn next_token(rest: &str, prev: Option<&ExplainToken>) -> ExplainToken {
    if let Some(token) = escape_rule(rest) {
        return token;
    }
    if let Some(token) = lazy_modifier_rule(rest, prev) {
        return token;
    }
    if let Some(token) = brace_rule(rest) {
        return token;
    }
    if let Some(token) = group_rule(rest) {
        return token;
    }
    if let Some(token) = set_rule(rest) {
        return token;
    }
    if let Some(token) = simple_rule(rest) {
        return token;
    }
    literal_token(rest)
}

/// Rule 1: `\` plus one character. Known classes get their fixed
/// description; anything else is an escaped literal.
fn escape_rule(rest: &str) -> Option<ExplainToken> {
    if !rest.starts_with('\\') {
        return None;
    }
    let escaped = rest[1..].chars().next()?;
    let consumed = &rest[..1 + escaped.len_utf8()];

    for (seq, description) in ESCAPE_CLASSES {
        if consumed == *seq {
            return Some(ExplainToken::new(TokenKind::EscapeClass, consumed, *description));
        }
    }
    Some(ExplainToken::new(
        TokenKind::Literal,
        consumed,
        format!("Literal character: matches '{escaped}' literally (escaped)."),
    ))
}

/// Rule 2: a `?` directly following a quantifier makes it lazy rather than
/// meaning zero-or-one.
fn lazy_modifier_rule(rest: &str, prev: Option<&ExplainToken>) -> Option<ExplainToken> {
    if !rest.starts_with('?') {
        return None;
    }
    let follows_quantifier = matches!(
        prev.map(|t| t.kind),
        Some(TokenKind::Quantifier | TokenKind::BraceQuantifier)
    );
    if !follows_quantifier {
        return None;
    }
    Some(ExplainToken::new(
        TokenKind::LazyModifier,
        "?",
        "Lazy modifier: makes the preceding quantifier match as few characters as possible.",
    ))
}

/// Rule 3: `{m}`, `{m,}`, or `{m,n}` with digits only. A `{` that does not
/// open a well-formed bound falls through to the literal rule.
fn brace_rule(rest: &str) -> Option<ExplainToken> {
    let (consumed, min, max, has_comma) = parse_brace_bound(rest)?;
    let phrase = match (max, has_comma) {
        (Some(max), _) => format!("between {min} and {max} times"),
        (None, true) => format!("at least {min} times"),
        (None, false) => format!("exactly {min} times"),
    };
    Some(ExplainToken::new(
        TokenKind::BraceQuantifier,
        consumed,
        format!("Quantifier: the preceding element must occur {phrase}."),
    ))
}

/// Parse a brace bound at the head of `rest`.
///
/// Returns the consumed substring, the lower bound, the optional upper
/// bound, and whether a comma was present.
fn parse_brace_bound(rest: &str) -> Option<(&str, &str, Option<&str>, bool)> {
    let inner = rest.strip_prefix('{')?;
    let close = inner.find('}')?;
    let body = &inner[..close];
    let consumed = &rest[..close + 2];

    let (min, max, has_comma) = match body.split_once(',') {
        None => (body, None, false),
        Some((min, "")) => (min, None, true),
        Some((min, max)) => (min, Some(max), true),
    };

    if min.is_empty() || !min.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(max) = max
        && !max.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    Some((consumed, min, max, has_comma))
}

/// Rule 4: group opens, longest prefix first.
fn group_rule(rest: &str) -> Option<ExplainToken> {
    for (prefix, description) in GROUP_PREFIXES {
        if rest.starts_with(prefix) {
            return Some(ExplainToken::new(TokenKind::GroupOpen, *prefix, *description));
        }
    }
    None
}

/// Rule 5: character set open, distinguishing a leading negation marker.
fn set_rule(rest: &str) -> Option<ExplainToken> {
    if rest.starts_with("[^") {
        return Some(ExplainToken::new(
            TokenKind::SetOpen,
            "[^",
            "Negated character set: matches any single character not in the set.",
        ));
    }
    if rest.starts_with('[') {
        return Some(ExplainToken::new(
            TokenKind::SetOpen,
            "[",
            "Character set: matches any single character from the set.",
        ));
    }
    None
}

/// Rule 6: fixed single-character tokens.
fn simple_rule(rest: &str) -> Option<ExplainToken> {
    let first = rest.chars().next()?;
    SIMPLE_TOKENS
        .iter()
        .find(|(c, _, _)| *c == first)
        .map(|(c, kind, description)| {
            ExplainToken::new(*kind, c.to_string(), *description)
        })
}

/// Fallback: consume one character as a literal.
fn literal_token(rest: &str) -> ExplainToken {
    // The caller only invokes this with a non-empty remainder.
    let c = rest.chars().next().unwrap_or('\u{fffd}');
    ExplainToken::new(
        TokenKind::Literal,
        &rest[..c.len_utf8()],
        format!("Literal character: matches '{c}' literally."),
    )
}

#[cfg(test)]
#[path = "explain_tests.rs"]
mod tests;
