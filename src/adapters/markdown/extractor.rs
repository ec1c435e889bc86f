use super::inline::InlineParser;
use super::lines::{classify, is_fence_close, LineKind};
use super::AstExtractor;
use crate::core::ast::{BlockNode, Document, InlineRun, ListKind};

/// Block scanner for the restricted Markdown dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownExtractor {
    /// Join consecutive `> ` lines into one blockquote.
    pub merge_blockquotes: bool,
}

/// Container that the next line may extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenBlock {
    None,
    List(ListKind),
    Quote,
}

impl AstExtractor for MarkdownExtractor {
    fn extract(&self, source: &str) -> Document {
        let lines: Vec<&str> = source.lines().collect();
        let closers = next_fence_closers(&lines);
        let mut doc = Document::default();
        let mut paragraph: Vec<InlineRun> = Vec::new();
        let mut open = OpenBlock::None;
        let mut idx = 0;

        while idx < lines.len() {
            let line = lines[idx];
            let kind = classify(line);
            log::trace!("line {}: {:?}", idx + 1, kind);

            match kind {
                LineKind::FenceOpen { language } => {
                    match closers.get(idx + 1).copied().flatten() {
                        Some(close) => {
                            flush_paragraph(&mut paragraph, &mut doc);
                            doc.blocks.push(BlockNode::CodeBlock {
                                language: language.map(str::to_string),
                                body: fence_body(&lines[idx + 1..close]),
                            });
                            open = OpenBlock::None;
                            idx = close + 1;
                            continue;
                        }
                        None => {
                            log::debug!("unclosed code fence at line {}, kept as text", idx + 1);
                            paragraph.push(InlineParser::parse(line.trim()));
                            open = OpenBlock::None;
                        }
                    }
                }
                LineKind::Blank => {
                    flush_paragraph(&mut paragraph, &mut doc);
                    open = OpenBlock::None;
                }
                LineKind::Heading { level, text } => {
                    flush_paragraph(&mut paragraph, &mut doc);
                    doc.blocks.push(BlockNode::Heading {
                        level,
                        content: InlineParser::parse(text),
                    });
                    open = OpenBlock::None;
                }
                LineKind::Rule => {
                    flush_paragraph(&mut paragraph, &mut doc);
                    doc.blocks.push(BlockNode::HorizontalRule);
                    open = OpenBlock::None;
                }
                LineKind::Item { kind, text } => {
                    flush_paragraph(&mut paragraph, &mut doc);
                    let item = InlineParser::parse(text);
                    match doc.blocks.last_mut() {
                        Some(BlockNode::List { items, .. }) if open == OpenBlock::List(kind) => {
                            items.push(item);
                        }
                        _ => doc.blocks.push(BlockNode::List {
                            kind,
                            items: vec![item],
                        }),
                    }
                    open = OpenBlock::List(kind);
                }
                LineKind::Quote(text) => {
                    flush_paragraph(&mut paragraph, &mut doc);
                    let run = InlineParser::parse(text);
                    match doc.blocks.last_mut() {
                        Some(BlockNode::Blockquote(runs))
                            if self.merge_blockquotes && open == OpenBlock::Quote =>
                        {
                            runs.push(run);
                        }
                        _ => doc.blocks.push(BlockNode::Blockquote(vec![run])),
                    }
                    open = OpenBlock::Quote;
                }
                LineKind::Text(text) => {
                    paragraph.push(InlineParser::parse(text.trim()));
                    open = OpenBlock::None;
                }
            }
            idx += 1;
        }

        flush_paragraph(&mut paragraph, &mut doc);
        log::trace!("extracted {} blocks", doc.blocks.len());
        doc
    }
}

fn flush_paragraph(paragraph: &mut Vec<InlineRun>, doc: &mut Document) {
    if !paragraph.is_empty() {
        doc.blocks
            .push(BlockNode::Paragraph(std::mem::take(paragraph)));
    }
}

/// For every line index, the first fence-closing line at or after it.
fn next_fence_closers(lines: &[&str]) -> Vec<Option<usize>> {
    let mut closers = vec![None; lines.len()];
    let mut next = None;
    for (idx, line) in lines.iter().enumerate().rev() {
        if is_fence_close(line) {
            next = Some(idx);
        }
        closers[idx] = next;
    }
    closers
}

/// Fence body with surrounding blank lines and trailing whitespace removed.
fn fence_body(lines: &[&str]) -> String {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |p| p + 1);
    lines[start..end.max(start)].join("\n").trim_end().to_string()
}
