//! Line classifier - local facts about a single source line.

use crate::core::ast::ListKind;
use regex::Regex;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,3}) (.*)$").expect("valid heading pattern"));
static FENCE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```(\w+)?\s*$").expect("valid fence pattern"));
static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*-] (.+)$").expect("valid unordered item pattern"));
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s(.+)$").expect("valid ordered item pattern"));
static QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^> (.+)$").expect("valid blockquote pattern"));

/// Classification of one line, without reference to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Heading { level: u8, text: &'a str },
    /// Opener candidate; only a fence if a closing line follows.
    FenceOpen { language: Option<&'a str> },
    Rule,
    Item { kind: ListKind, text: &'a str },
    Quote(&'a str),
    Text(&'a str),
}

pub fn classify(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if let Some(caps) = FENCE_OPEN.captures(line) {
        return LineKind::FenceOpen {
            language: caps.get(1).map(|m| m.as_str()),
        };
    }
    if line == "---" || line == "***" {
        return LineKind::Rule;
    }
    if let Some(caps) = HEADING.captures(line) {
        let level = caps.get(1).map_or(1, |m| m.len()) as u8;
        let text = caps.get(2).map_or("", |m| m.as_str());
        return LineKind::Heading { level, text };
    }
    if let Some(text) = capture_rest(&UNORDERED_ITEM, line) {
        return LineKind::Item {
            kind: ListKind::Unordered,
            text,
        };
    }
    if let Some(text) = capture_rest(&ORDERED_ITEM, line) {
        return LineKind::Item {
            kind: ListKind::Ordered,
            text,
        };
    }
    if let Some(text) = capture_rest(&QUOTE, line) {
        return LineKind::Quote(text);
    }
    LineKind::Text(line)
}

/// Whether `line` closes an open fence.
pub fn is_fence_close(line: &str) -> bool {
    line.trim() == "```"
}

fn capture_rest<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
