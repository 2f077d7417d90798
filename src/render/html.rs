//! HTML rendering for inline spans.

use crate::model::{InlineSpan, RichText};

/// Render rich text to an HTML fragment.
///
/// Strong spans become `<strong>`, emphasis `<em>`, code `<code>`. All span
/// text is HTML-escaped; the source convention treats markup characters as
/// formatting only, never as raw HTML.
pub fn to_html(rich: &RichText) -> String {
    let mut out = String::new();
    for span in &rich.spans {
        match span {
            InlineSpan::Text(t) => out.push_str(&escape(t)),
            InlineSpan::Strong(t) => {
                out.push_str("<strong>");
                out.push_str(&escape(t));
                out.push_str("</strong>");
            }
            InlineSpan::Emphasis(t) => {
                out.push_str("<em>");
                out.push_str(&escape(t));
                out.push_str("</em>");
            }
            InlineSpan::Code(t) => {
                out.push_str("<code>");
                out.push_str(&escape(t));
                out.push_str("</code>");
            }
        }
    }
    out
}

/// Escape the characters HTML treats specially in text content.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::format_inline;

    #[test]
    fn test_to_html_tags() {
        let html = to_html(&format_inline("Built **fast** *parsers* with `regex`"));
        assert_eq!(
            html,
            "Built <strong>fast</strong> <em>parsers</em> with <code>regex</code>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let html = to_html(&format_inline("uses `Vec<u8>` & more"));
        assert_eq!(html, "uses <code>Vec&lt;u8&gt;</code> &amp; more");
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_html(&RichText::new()), "");
    }
}
