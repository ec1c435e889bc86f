//! # roadmark
//!
//! Renders the restricted Markdown dialect produced for study plans and
//! cheat sheets (headings, emphasis, code, lists, links, quotes, rules,
//! paragraphs) into HTML fragments.
//!
//! ## Example
//!
//! ```
//! use roadmark::{MarkdownToHtml, RenderOptions, ClassMap};
//!
//! let options = RenderOptions {
//!     classes: ClassMap::bare(),
//!     ..Default::default()
//! };
//!
//! let converter = MarkdownToHtml::new(options);
//! let html = converter.render("**Day 1**: read *the docs*");
//! assert_eq!(html, "<p><strong>Day 1</strong>: read <em>the docs</em></p>");
//! ```

pub mod adapters;
pub mod config;
pub mod converter;
pub mod core;
pub mod error;
pub mod render;

pub use converter::MarkdownToHtml;
pub use error::{Error, Result};
pub use render::ClassMap;

use serde::Deserialize;

/// Options for Markdown to HTML rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Which text is escaped on output.
    pub sanitize: SanitizeMode,
    /// Whether consecutive `> ` lines share one blockquote.
    pub merge_blockquotes: bool,
    /// Class names attached to each element.
    pub classes: ClassMap,
    /// Wraps the fragment in a `<div>` with this class when set.
    pub container: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sanitize: SanitizeMode::Strict,
            merge_blockquotes: false,
            classes: ClassMap::default(),
            container: None,
        }
    }
}

/// Specifies which rendered text is HTML-escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanitizeMode {
    /// Escape all text and attributes; drop links with executable schemes.
    #[default]
    Strict,
    /// Escape fenced code bodies only. Every other text node is emitted as
    /// trusted markup, which is an injection risk for untrusted content.
    Legacy,
}

/// Renders optional Markdown content with default options.
///
/// Returns `None` for absent or empty content.
pub fn render_markdown(content: Option<&str>) -> Option<String> {
    MarkdownToHtml::with_defaults().render_optional(content)
}

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::prelude::*;

    /// Renders Markdown to an HTML fragment, or None for empty content.
    #[pyfunction]
    #[pyo3(signature = (content, legacy = false))]
    fn render_markdown(content: Option<String>, legacy: bool) -> Option<String> {
        let options = RenderOptions {
            sanitize: if legacy {
                SanitizeMode::Legacy
            } else {
                SanitizeMode::Strict
            },
            ..Default::default()
        };
        MarkdownToHtml::new(options).render_optional(content.as_deref())
    }

    /// Renders a Markdown file with options from an optional TOML config.
    #[pyfunction]
    #[pyo3(signature = (path, config = None))]
    fn render_file(path: String, config: Option<String>) -> PyResult<String> {
        let options = match config {
            Some(config_path) => crate::config::load_from_path(config_path)
                .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))?,
            None => RenderOptions::default(),
        };
        MarkdownToHtml::new(options)
            .render_file(&path)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    pub fn roadmark(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(render_markdown, m)?)?;
        m.add_function(wrap_pyfunction!(render_file, m)?)?;
        Ok(())
    }
}
