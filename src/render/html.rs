use super::escape::{escape_html, is_safe_href};
use crate::core::ast::{BlockNode, Document, InlineNode, InlineRun, ListKind};
use crate::render::Renderer;
use crate::{RenderOptions, SanitizeMode};

/// Renders a [`Document`] to an HTML fragment.
#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer<'a> {
    options: &'a RenderOptions,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    fn strict(&self) -> bool {
        self.options.sanitize == SanitizeMode::Strict
    }

    /// Text node: escaped in strict mode, trusted markup in legacy mode.
    fn push_text(&self, out: &mut String, text: &str) {
        if self.strict() {
            out.push_str(&escape_html(text));
        } else {
            out.push_str(text);
        }
    }

    fn render_block(&self, out: &mut String, block: &BlockNode) {
        let classes = &self.options.classes;
        match block {
            BlockNode::Heading { level, content } => {
                let tag = format!("h{}", level);
                open_tag(out, &tag, classes.heading(*level));
                self.render_run(out, content);
                close_tag(out, &tag);
            }
            BlockNode::CodeBlock { language, body } => {
                let code_class = match language {
                    Some(lang) if classes.code_block.is_empty() => format!("language-{}", lang),
                    Some(lang) => format!("{} language-{}", classes.code_block, lang),
                    None => classes.code_block.clone(),
                };
                open_tag(out, "pre", &classes.pre);
                open_tag(out, "code", &code_class);
                // Fenced bodies are escaped in every mode.
                out.push_str(&escape_html(body));
                out.push_str("</code></pre>");
            }
            BlockNode::Paragraph(runs) => {
                open_tag(out, "p", &classes.p);
                self.render_lines(out, runs);
                close_tag(out, "p");
            }
            BlockNode::List { kind, items } => {
                let (tag, list_class, item_class) = match kind {
                    ListKind::Unordered => ("ul", &classes.ul, &classes.li),
                    ListKind::Ordered => ("ol", &classes.ol, &classes.ol_li),
                };
                open_tag(out, tag, list_class);
                for item in items {
                    open_tag(out, "li", item_class);
                    if *kind == ListKind::Unordered {
                        out.push_str(&escape_html(&classes.bullet));
                    }
                    self.render_run(out, item);
                    close_tag(out, "li");
                }
                close_tag(out, tag);
            }
            BlockNode::Blockquote(runs) => {
                open_tag(out, "blockquote", &classes.blockquote);
                self.render_lines(out, runs);
                close_tag(out, "blockquote");
            }
            BlockNode::HorizontalRule => {
                out.push_str("<hr");
                push_class_attr(out, &classes.hr);
                out.push_str(" />");
            }
        }
    }

    fn render_lines(&self, out: &mut String, runs: &[InlineRun]) {
        for (i, run) in runs.iter().enumerate() {
            if i > 0 {
                out.push_str("<br />");
            }
            self.render_run(out, run);
        }
    }

    fn render_run(&self, out: &mut String, run: &[InlineNode]) {
        for node in run {
            self.render_inline(out, node);
        }
    }

    fn render_inline(&self, out: &mut String, node: &InlineNode) {
        let classes = &self.options.classes;
        match node {
            InlineNode::Text(text) => self.push_text(out, text),
            InlineNode::Strong(children) => {
                open_tag(out, "strong", &classes.strong);
                self.render_run(out, children);
                close_tag(out, "strong");
            }
            InlineNode::Emphasis(children) => {
                open_tag(out, "em", &classes.em);
                self.render_run(out, children);
                close_tag(out, "em");
            }
            InlineNode::Code(code) => {
                open_tag(out, "code", &classes.code);
                self.push_text(out, code);
                close_tag(out, "code");
            }
            InlineNode::Link { label, href } => {
                if self.strict() && !is_safe_href(href) {
                    log::debug!("dropping link with unsafe destination: {}", href);
                    self.render_run(out, label);
                    return;
                }
                out.push_str("<a href=\"");
                self.push_text(out, href);
                out.push('"');
                push_class_attr(out, &classes.a);
                out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\">");
                self.render_run(out, label);
                close_tag(out, "a");
            }
        }
    }
}

impl Renderer for HtmlRenderer<'_> {
    fn render(&self, document: &Document) -> String {
        let mut out = String::new();
        if let Some(container) = &self.options.container {
            open_tag(&mut out, "div", container);
        }
        for block in &document.blocks {
            self.render_block(&mut out, block);
        }
        if self.options.container.is_some() {
            close_tag(&mut out, "div");
        }
        out
    }
}

fn push_class_attr(out: &mut String, class: &str) {
    if !class.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape_html(class));
        out.push('"');
    }
}

fn open_tag(out: &mut String, tag: &str, class: &str) {
    out.push('<');
    out.push_str(tag);
    push_class_attr(out, class);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
