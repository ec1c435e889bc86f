mod extractor;
mod inline;
mod lines;

use crate::core::ast::Document;

pub trait AstExtractor {
    fn extract(&self, source: &str) -> Document;
}

pub use extractor::MarkdownExtractor;
pub use inline::InlineParser;
