//! Regex-based string extraction from JavaScript source.
//!
//! This is a heuristic, not a parser. Three passes run over the
//! comment-stripped text and their results are unioned:
//!
//! 1. markup text between `>` and the next `<`
//! 2. the interior of `"..."` / `'...'` literals on a single line
//! 3. backtick templates, searched for markup text and, when they hold no
//!    angle brackets at all, taken whole
//!
//! Line endings are normalized first: `\r\n` and a lone `\r` both become
//! `\n`, so CRLF files yield the same strings as LF files.
//!
//! Comment stripping does not know about string literals. A `//` inside a
//! URL literal cuts the rest of that line, and a `/*` inside a string can
//! swallow code up to the next `*/`.

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::charset::TargetCharset;

static LINE_ENDING_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n?").unwrap());

static LINE_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//.*").unwrap());

static BLOCK_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static MARKUP_TEXT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">([^<]+)<").unwrap());

// Same quote must open and close; `.` never crosses a newline.
static QUOTED_STRING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"\n]*)"|'([^'\n]*)'"#).unwrap());

static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Turn `\r\n` and lone `\r` into `\n`.
pub fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    LINE_ENDING_REGEX.replace_all(content, "\n")
}

/// Remove `//` line comments, then `/* */` block comments.
pub fn strip_comments(content: &str) -> String {
    let without_line = LINE_COMMENT_REGEX.replace_all(content, "");
    BLOCK_COMMENT_REGEX
        .replace_all(&without_line, "")
        .into_owned()
}

/// Raw runs of text between `>` and the next `<`.
pub fn markup_texts(content: &str) -> impl Iterator<Item = &str> {
    MARKUP_TEXT_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Interiors of single- or double-quoted literals.
pub fn quoted_literals(content: &str) -> impl Iterator<Item = &str> {
    QUOTED_STRING_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
}

/// Bodies of backtick templates.
pub fn template_bodies(content: &str) -> impl Iterator<Item = &str> {
    TEMPLATE_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Run all three passes over one file's content and return the distinct
/// trimmed fragments that pass the character filter.
pub fn extract_strings(content: &str, charset: &TargetCharset) -> HashSet<String> {
    let content = strip_comments(&normalize_line_endings(content));
    let mut found = HashSet::new();

    for raw in markup_texts(&content) {
        if let Some(text) = charset.accept(raw) {
            found.insert(text.to_string());
        }
    }

    for raw in quoted_literals(&content) {
        if let Some(text) = charset.accept(raw)
            && !text.starts_with('<')
        {
            found.insert(text.to_string());
        }
    }

    for body in template_bodies(&content) {
        for raw in markup_texts(body) {
            if let Some(text) = charset.accept(raw) {
                found.insert(text.to_string());
            }
        }
        if !body.contains(['<', '>'])
            && let Some(text) = charset.accept(body)
        {
            found.insert(text.to_string());
        }
    }

    found
}
