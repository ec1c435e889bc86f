//! Host-supplied class names for rendered elements.

use serde::Deserialize;

/// Class attribute values per element. Empty strings omit the attribute.
///
/// The default set is the Tailwind styling used by the study-plan web app.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClassMap {
    pub h1: String,
    pub h2: String,
    pub h3: String,
    pub p: String,
    pub strong: String,
    pub em: String,
    /// Inline code span.
    pub code: String,
    pub pre: String,
    /// `<code>` inside a fenced block.
    pub code_block: String,
    pub ul: String,
    pub ol: String,
    /// Unordered list item.
    pub li: String,
    pub ol_li: String,
    pub a: String,
    pub blockquote: String,
    pub hr: String,
    /// Text placed before each unordered item.
    pub bullet: String,
}

impl ClassMap {
    /// No classes and no bullet prefix.
    pub fn bare() -> Self {
        Self {
            h1: String::new(),
            h2: String::new(),
            h3: String::new(),
            p: String::new(),
            strong: String::new(),
            em: String::new(),
            code: String::new(),
            pre: String::new(),
            code_block: String::new(),
            ul: String::new(),
            ol: String::new(),
            li: String::new(),
            ol_li: String::new(),
            a: String::new(),
            blockquote: String::new(),
            hr: String::new(),
            bullet: String::new(),
        }
    }

    pub fn heading(&self, level: u8) -> &str {
        match level {
            1 => &self.h1,
            2 => &self.h2,
            _ => &self.h3,
        }
    }
}

impl Default for ClassMap {
    fn default() -> Self {
        Self {
            h1: "text-2xl font-bold text-slate-800 mt-6 mb-3".to_string(),
            h2: "text-xl font-bold text-slate-800 mt-5 mb-3".to_string(),
            h3: "text-lg font-bold text-slate-800 mt-4 mb-2".to_string(),
            p: "mb-3 leading-relaxed".to_string(),
            strong: "font-semibold text-slate-900".to_string(),
            em: "italic".to_string(),
            code: "bg-slate-200 text-slate-800 px-1.5 py-0.5 rounded text-sm font-mono".to_string(),
            pre: "bg-slate-800 text-slate-100 p-4 rounded-lg overflow-x-auto my-3".to_string(),
            code_block: "text-sm font-mono".to_string(),
            ul: "space-y-1 my-2".to_string(),
            ol: "list-decimal ml-6 space-y-1 my-2".to_string(),
            li: "ml-4 mb-1".to_string(),
            ol_li: "ml-4 mb-1 list-decimal".to_string(),
            a: "text-blue-600 hover:text-blue-800 underline".to_string(),
            blockquote: "border-l-4 border-slate-300 pl-4 italic text-slate-600 my-2".to_string(),
            hr: "my-4 border-slate-300".to_string(),
            bullet: "• ".to_string(),
        }
    }
}
