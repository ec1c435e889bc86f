//! Markdown to HTML conversion pipeline.

use crate::adapters::markdown::{AstExtractor, MarkdownExtractor};
use crate::core::ast::Document;
use crate::render::{HtmlRenderer, Renderer};
use crate::{RenderOptions, Result};
use std::path::Path;

/// Main converter struct that orchestrates Markdown to HTML conversion.
#[derive(Debug, Clone, Default)]
pub struct MarkdownToHtml {
    options: RenderOptions,
}

impl MarkdownToHtml {
    /// Creates a new converter with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(RenderOptions::default())
    }

    /// Parses Markdown into the block/inline document tree.
    pub fn parse(&self, source: &str) -> Document {
        let extractor = MarkdownExtractor {
            merge_blockquotes: self.options.merge_blockquotes,
        };
        extractor.extract(source)
    }

    /// Renders Markdown to an HTML fragment.
    ///
    /// Total over all inputs: malformed syntax is kept as literal text and
    /// empty input yields an empty string.
    pub fn render(&self, source: &str) -> String {
        let document = self.parse(source);
        log::debug!("rendering {} blocks", document.blocks.len());
        HtmlRenderer::new(&self.options).render(&document)
    }

    /// Renders optional content. Absent or empty content produces `None` so
    /// the caller can skip mounting anything.
    pub fn render_optional(&self, source: Option<&str>) -> Option<String> {
        match source {
            Some(text) if !text.is_empty() => Some(self.render(text)),
            _ => None,
        }
    }

    /// Reads a Markdown file and renders it.
    ///
    /// # Arguments
    /// * `path` - Path to the Markdown file
    pub fn render_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Ok(self.render(&source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassMap, SanitizeMode};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn bare() -> MarkdownToHtml {
        MarkdownToHtml::new(RenderOptions {
            classes: ClassMap::bare(),
            ..Default::default()
        })
    }

    #[test]
    fn test_render_optional_skips_absent_and_empty() {
        let converter = MarkdownToHtml::with_defaults();
        assert_eq!(converter.render_optional(None), None);
        assert_eq!(converter.render_optional(Some("")), None);
        assert!(converter.render_optional(Some("hi")).is_some());
    }

    #[test]
    fn test_blocks_have_no_separator() {
        assert_eq!(
            bare().render("# Title\n\nBody line one\nline two"),
            "<h1>Title</h1><p>Body line one<br />line two</p>"
        );
    }

    #[test]
    fn test_merge_option_reaches_extractor() {
        let converter = MarkdownToHtml::new(RenderOptions {
            merge_blockquotes: true,
            classes: ClassMap::bare(),
            ..Default::default()
        });
        assert_eq!(
            converter.render("> a\n> b"),
            "<blockquote>a<br />b</blockquote>"
        );
    }

    #[test]
    fn test_legacy_mode_passes_markup() {
        let converter = MarkdownToHtml::new(RenderOptions {
            sanitize: SanitizeMode::Legacy,
            classes: ClassMap::bare(),
            ..Default::default()
        });
        assert_eq!(
            converter.render("hello <span>there</span>"),
            "<p>hello <span>there</span></p>"
        );
    }

    #[test]
    fn test_render_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "- one\n- two").expect("write markdown");
        let html = bare().render_file(file.path()).expect("file renders");
        assert_eq!(html, "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn test_render_missing_file_is_io_error() {
        let err = bare().render_file("/nonexistent/plan.md").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
