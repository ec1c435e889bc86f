/// Parsed Markdown document: blocks in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<BlockNode>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// One inline run, typically the content of a single source line.
pub type InlineRun = Vec<InlineNode>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNode {
    Heading {
        level: u8,
        content: InlineRun,
    },
    /// Fenced code. `body` is raw source text; escaping happens at render time.
    CodeBlock {
        language: Option<String>,
        body: String,
    },
    /// Consecutive text lines; rendered with line breaks between runs.
    Paragraph(Vec<InlineRun>),
    List {
        kind: ListKind,
        items: Vec<InlineRun>,
    },
    Blockquote(Vec<InlineRun>),
    HorizontalRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    Text(String),
    Strong(InlineRun),
    Emphasis(InlineRun),
    Code(String),
    Link { label: InlineRun, href: String },
}

impl InlineNode {
    pub fn text(value: impl Into<String>) -> Self {
        InlineNode::Text(value.into())
    }

    /// Concatenated visible text, markers stripped.
    pub fn plain_text(&self) -> String {
        match self {
            InlineNode::Text(text) | InlineNode::Code(text) => text.clone(),
            InlineNode::Strong(children)
            | InlineNode::Emphasis(children)
            | InlineNode::Link {
                label: children, ..
            } => children.iter().map(InlineNode::plain_text).collect(),
        }
    }
}
