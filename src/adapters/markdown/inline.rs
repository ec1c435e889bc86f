//! Inline span parser - turns one line of text into styled spans.

use crate::core::ast::{InlineNode, InlineRun};

/// Left-to-right recursive-descent parser for inline spans.
///
/// At each position the earliest span that can be closed wins; text that
/// opens a span but never closes it stays literal. Delimited content is
/// parsed again for nested spans, except code spans which are verbatim.
pub struct InlineParser;

impl InlineParser {
    /// Parses a single line of text into inline nodes.
    pub fn parse(text: &str) -> InlineRun {
        SpanScanner::new(text).parse()
    }
}

/// Closing markers searched for while scanning a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    DoubleStar,
    Star,
    DoubleUnderscore,
    Underscore,
    Backtick,
    CloseBracket,
    CloseParen,
}

impl Marker {
    const COUNT: usize = 7;

    fn as_str(self) -> &'static str {
        match self {
            Marker::DoubleStar => "**",
            Marker::Star => "*",
            Marker::DoubleUnderscore => "__",
            Marker::Underscore => "_",
            Marker::Backtick => "`",
            Marker::CloseBracket => "]",
            Marker::CloseParen => ")",
        }
    }

    fn underscore(self) -> bool {
        matches!(self, Marker::DoubleUnderscore | Marker::Underscore)
    }
}

/// Scan state for one line.
///
/// Each marker remembers its last search as `(from, result)`: the first valid
/// closer at or after `from`. Openers only move forward, so a later search
/// that starts inside a remembered range is answered without rescanning and
/// every byte is searched at most once per marker.
struct SpanScanner<'a> {
    text: &'a str,
    searches: [Option<(usize, Option<usize>)>; Marker::COUNT],
}

impl<'a> SpanScanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            searches: [None; Marker::COUNT],
        }
    }

    fn parse(&mut self) -> InlineRun {
        let text = self.text;
        let mut out = InlineRun::new();
        let mut plain = String::new();
        let mut pos = 0;

        while pos < text.len() {
            if let Some((node, end)) = self.try_span(pos) {
                flush_text(&mut plain, &mut out);
                out.push(node);
                pos = end;
                continue;
            }
            match text[pos..].chars().next() {
                Some(ch) => {
                    plain.push(ch);
                    pos += ch.len_utf8();
                }
                None => break,
            }
        }

        flush_text(&mut plain, &mut out);
        out
    }

    /// Tries to match a span starting at `at`; returns the node and the byte
    /// offset just past it.
    fn try_span(&mut self, at: usize) -> Option<(InlineNode, usize)> {
        match self.text.as_bytes()[at] {
            b'`' => self.code_span(at),
            b'*' => self
                .delimited(at, Marker::DoubleStar, InlineNode::Strong)
                .or_else(|| self.delimited(at, Marker::Star, InlineNode::Emphasis)),
            b'_' if can_open_underscore(self.text, at) => self
                .delimited(at, Marker::DoubleUnderscore, InlineNode::Strong)
                .or_else(|| self.delimited(at, Marker::Underscore, InlineNode::Emphasis)),
            b'[' => self.link(at),
            _ => None,
        }
    }

    /// First valid closer for `marker` at or after `from`.
    fn find(&mut self, marker: Marker, from: usize) -> Option<usize> {
        let slot = marker as usize;
        if let Some((searched_from, result)) = self.searches[slot] {
            if from >= searched_from {
                match result {
                    None => return None,
                    Some(found) if from <= found => return Some(found),
                    Some(_) => {}
                }
            }
        }
        let result = self.scan(marker, from);
        self.searches[slot] = Some((from, result));
        result
    }

    fn scan(&self, marker: Marker, from: usize) -> Option<usize> {
        let pattern = marker.as_str();
        let mut from = from;
        while let Some(rel) = self.text[from..].find(pattern) {
            let close = from + rel;
            if !marker.underscore() || can_close_underscore(self.text, close + pattern.len()) {
                return Some(close);
            }
            from = close + 1;
        }
        None
    }

    fn code_span(&mut self, at: usize) -> Option<(InlineNode, usize)> {
        let start = at + 1;
        let close = self.find(Marker::Backtick, start)?;
        if close == start {
            return None;
        }
        Some((InlineNode::Code(self.text[start..close].to_string()), close + 1))
    }

    /// Matches `marker content marker` with non-empty content.
    fn delimited(
        &mut self,
        at: usize,
        marker: Marker,
        wrap: fn(InlineRun) -> InlineNode,
    ) -> Option<(InlineNode, usize)> {
        let pattern = marker.as_str();
        if !self.text[at..].starts_with(pattern) {
            return None;
        }
        let start = at + pattern.len();
        let mut close = self.find(marker, start)?;
        if close == start {
            close = self.find(marker, start + 1)?;
        }
        let content = InlineParser::parse(&self.text[start..close]);
        Some((wrap(content), close + pattern.len()))
    }

    fn link(&mut self, at: usize) -> Option<(InlineNode, usize)> {
        let label_start = at + 1;
        let label_end = self.find(Marker::CloseBracket, label_start)?;
        if label_end == label_start || !self.text[label_end + 1..].starts_with('(') {
            return None;
        }
        let href_start = label_end + 2;
        let href_end = self.find(Marker::CloseParen, href_start)?;
        if href_end == href_start {
            return None;
        }
        let node = InlineNode::Link {
            label: InlineParser::parse(&self.text[label_start..label_end]),
            href: self.text[href_start..href_end].to_string(),
        };
        Some((node, href_end + 1))
    }
}

fn flush_text(plain: &mut String, out: &mut InlineRun) {
    if !plain.is_empty() {
        out.push(InlineNode::Text(std::mem::take(plain)));
    }
}

// Intraword underscores (snake_case) never delimit.
fn can_open_underscore(text: &str, at: usize) -> bool {
    text[..at]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric())
}

fn can_close_underscore(text: &str, end: usize) -> bool {
    text[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric())
}
