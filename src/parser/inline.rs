//! Inline markup transform.
//!
//! Converts the small Markdown subset used in resume text fields into typed
//! [`RichText`] spans. The rules are literal and applied in one fixed order:
//!
//! 1. `**text**` / `__text__` → strong
//! 2. `*text*` / `_text_` → emphasis
//! 3. `` `text` `` → inline code
//!
//! Matching is non-greedy, non-recursive, and first-match-wins. Nested or
//! overlapping markup is lossy: whichever rule matches first at a position
//! consumes its delimiters and the inner text is kept verbatim.

use crate::model::{InlineSpan, RichText};
use regex::Regex;
use std::sync::OnceLock;

/// One alternation, ordered so that double-character delimiters win over
/// their single-character prefixes.
fn markup_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\*\*(.+?)\*\*|__(.+?)__|\*(.+?)\*|_(.+?)_|`(.+?)`")
            .expect("inline markup regex is valid")
    })
}

/// Transform raw text into rich text spans.
///
/// Text outside any markup becomes plain [`InlineSpan::Text`] spans; the
/// span order preserves the source order.
///
/// # Example
///
/// ```
/// use foliomd::parser::format_inline;
///
/// let rich = format_inline("Shipped **fast** `parsers`");
/// assert_eq!(rich.plain_text(), "Shipped fast parsers");
/// ```
pub fn format_inline(text: &str) -> RichText {
    let mut rich = RichText::new();
    let mut last = 0;

    for caps in markup_regex().captures_iter(text) {
        let m = caps.get(0).expect("whole match always present");
        if m.start() > last {
            rich.push(InlineSpan::Text(text[last..m.start()].to_string()));
        }

        // Exactly one capture group participates per match; group order
        // mirrors the rule order.
        let span = if let Some(inner) = caps.get(1).or_else(|| caps.get(2)) {
            InlineSpan::Strong(inner.as_str().to_string())
        } else if let Some(inner) = caps.get(3).or_else(|| caps.get(4)) {
            InlineSpan::Emphasis(inner.as_str().to_string())
        } else {
            let inner = caps.get(5).expect("code group matched");
            InlineSpan::Code(inner.as_str().to_string())
        };
        rich.push(span);
        last = m.end();
    }

    if last < text.len() {
        rich.push(InlineSpan::Text(text[last..].to_string()));
    }
    rich
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_passthrough() {
        let rich = format_inline("no markup here");
        assert_eq!(rich.spans, vec![InlineSpan::Text("no markup here".to_string())]);
    }

    #[test]
    fn test_strong_both_delimiters() {
        assert_eq!(
            format_inline("**bold**").spans,
            vec![InlineSpan::Strong("bold".to_string())]
        );
        assert_eq!(
            format_inline("__bold__").spans,
            vec![InlineSpan::Strong("bold".to_string())]
        );
    }

    #[test]
    fn test_emphasis_both_delimiters() {
        assert_eq!(
            format_inline("*it*").spans,
            vec![InlineSpan::Emphasis("it".to_string())]
        );
        assert_eq!(
            format_inline("_it_").spans,
            vec![InlineSpan::Emphasis("it".to_string())]
        );
    }

    #[test]
    fn test_code() {
        assert_eq!(
            format_inline("`let x`").spans,
            vec![InlineSpan::Code("let x".to_string())]
        );
    }

    #[test]
    fn test_mixed_spans_preserve_order() {
        let rich = format_inline("Built **GraphQL** APIs in *Rust* with `axum`");
        assert_eq!(
            rich.spans,
            vec![
                InlineSpan::Text("Built ".to_string()),
                InlineSpan::Strong("GraphQL".to_string()),
                InlineSpan::Text(" APIs in ".to_string()),
                InlineSpan::Emphasis("Rust".to_string()),
                InlineSpan::Text(" with ".to_string()),
                InlineSpan::Code("axum".to_string()),
            ]
        );
    }

    #[test]
    fn test_double_delimiter_wins_over_single() {
        // "**x**" must not parse as emphasis of "*x*"
        assert_eq!(
            format_inline("**x**").spans,
            vec![InlineSpan::Strong("x".to_string())]
        );
    }

    #[test]
    fn test_unclosed_markers_stay_literal() {
        let rich = format_inline("a ** b");
        assert_eq!(rich.plain_text(), "a ** b");
        assert_eq!(rich.spans.len(), 1);
    }

    #[test]
    fn test_nested_markup_is_lossy_first_match_wins() {
        // The outer strong rule matches first; inner markers stay verbatim.
        let rich = format_inline("**outer *inner* text**");
        assert_eq!(
            rich.spans,
            vec![InlineSpan::Strong("outer *inner* text".to_string())]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(format_inline("").is_empty());
    }
}
