//! Inline text spans produced by the markup transform.

use serde::{Deserialize, Serialize};

/// A piece of formatted text: an ordered sequence of inline spans.
///
/// Produced by [`crate::parser::format_inline`] from raw Markdown-ish text.
/// The span sequence is flat; nested or overlapping markup is not
/// represented (the transform is first-match-wins, see the parser module).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    /// Spans in display order
    pub spans: Vec<InlineSpan>,
}

impl RichText {
    /// Create an empty rich text value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create rich text holding a single unformatted span.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::new();
        }
        Self {
            spans: vec![InlineSpan::Text(text)],
        }
    }

    /// Append a span.
    pub fn push(&mut self, span: InlineSpan) {
        self.spans.push(span);
    }

    /// Get the text content with all markup dropped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(InlineSpan::text).collect()
    }

    /// Check whether the value contains no visible text.
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text().is_empty())
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

/// A single inline span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum InlineSpan {
    /// Unformatted text
    Text(String),

    /// Strong emphasis (`**bold**` or `__bold__`)
    Strong(String),

    /// Emphasis (`*italic*` or `_italic_`)
    Emphasis(String),

    /// Inline code (`` `code` ``)
    Code(String),
}

impl InlineSpan {
    /// Get the inner text of the span.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Text(t)
            | InlineSpan::Strong(t)
            | InlineSpan::Emphasis(t)
            | InlineSpan::Code(t) => t,
        }
    }
}
