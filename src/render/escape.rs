/// Escapes `& < > " '` for use in element content and quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const BLOCKED_SCHEMES: [&str; 4] = ["javascript:", "vbscript:", "data:", "file:"];

/// Whether a link destination may be emitted as an `href`.
///
/// Relative paths, fragments and ordinary schemes pass. Schemes that execute
/// or embed content are refused, ignoring case, whitespace and control
/// characters browsers strip before resolving the URL.
pub fn is_safe_href(href: &str) -> bool {
    let normalized: String = href
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .flat_map(char::to_lowercase)
        .collect();
    !BLOCKED_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a\"b<c>d&e'"), "a&quot;b&lt;c&gt;d&amp;e&#39;");
    }

    #[test]
    fn test_escape_html_passes_plain_text() {
        assert_eq!(escape_html("plain • text"), "plain • text");
    }

    #[test]
    fn test_safe_hrefs() {
        assert!(is_safe_href("http://example.com"));
        assert!(is_safe_href("https://example.com/a?b=c"));
        assert!(is_safe_href("mailto:someone@example.com"));
        assert!(is_safe_href("./relative/path"));
        assert!(is_safe_href("#section"));
    }

    #[test]
    fn test_unsafe_hrefs() {
        assert!(!is_safe_href("javascript:alert(1)"));
        assert!(!is_safe_href("  JavaScript:alert(1)"));
        assert!(!is_safe_href("java\tscript:alert(1)"));
        assert!(!is_safe_href("data:text/html;base64,AAAA"));
        assert!(!is_safe_href("VBSCRIPT:msgbox"));
    }
}
