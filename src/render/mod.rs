mod classes;
mod escape;
mod html;

use crate::core::ast::Document;

pub use classes::ClassMap;
pub use escape::{escape_html, is_safe_href};
pub use html::HtmlRenderer;

pub trait Renderer {
    fn render(&self, document: &Document) -> String;
}
