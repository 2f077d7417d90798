//! Document-level types: frontmatter mapping and parsed documents.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A parsed content document: frontmatter metadata plus the Markdown body.
///
/// Built once by [`crate::parser::extract_frontmatter`] and never mutated
/// afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Frontmatter metadata (empty when the source had no `---` block)
    pub frontmatter: Frontmatter,

    /// Body text with the frontmatter block removed
    pub body: String,
}

impl Document {
    /// Create a document from its parts.
    pub fn new(frontmatter: Frontmatter, body: impl Into<String>) -> Self {
        Self {
            frontmatter,
            body: body.into(),
        }
    }

    /// Check whether the document carries any metadata.
    pub fn has_frontmatter(&self) -> bool {
        !self.frontmatter.is_empty()
    }
}

/// A frontmatter value: either a scalar string or an ordered list of strings.
///
/// Lists come from the bracketed syntax (`tech: [React, Node]`). Nested
/// structures are not supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A single string value
    Scalar(String),
    /// An ordered sequence of strings
    List(Vec<String>),
}

impl Value {
    /// Get the scalar string, or `None` for lists.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::List(_) => None,
        }
    }

    /// Get the list elements, or `None` for scalars.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::Scalar(_) => None,
            Value::List(items) => Some(items),
        }
    }

    /// Get the scalar, or the first list element for lists.
    ///
    /// Mirrors the common "value may be a string or an array" frontmatter
    /// convention where a single display value is wanted.
    pub fn first(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::List(items) => items.first().map(String::as_str),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

/// Frontmatter metadata: a flat mapping from keys to [`Value`]s.
///
/// Keys are unique and unordered. No schema is enforced; consumers supply
/// their own defaults for absent keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frontmatter {
    entries: HashMap<String, Value>,
}

impl Frontmatter {
    /// Create an empty frontmatter mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Get the raw value for a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Get a scalar string value for a key.
    pub fn str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Get a scalar string value, falling back to a default.
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.str(key).unwrap_or(default)
    }

    /// Get a list value for a key.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).and_then(Value::as_list)
    }

    /// Get the scalar value, or the first element when the value is a list.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::first)
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys in the mapping.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontmatter_accessors() {
        let mut fm = Frontmatter::new();
        fm.insert("title", "Hello");
        fm.insert("tech", vec!["React".to_string(), "Node".to_string()]);

        assert_eq!(fm.str("title"), Some("Hello"));
        assert_eq!(fm.str("tech"), None);
        assert_eq!(fm.list("tech").map(<[String]>::len), Some(2));
        assert_eq!(fm.first("tech"), Some("React"));
        assert_eq!(fm.str_or("missing", "fallback"), "fallback");
        assert_eq!(fm.len(), 2);
    }

    #[test]
    fn test_value_first() {
        assert_eq!(Value::Scalar("a".to_string()).first(), Some("a"));
        assert_eq!(Value::List(vec![]).first(), None);
    }

    #[test]
    fn test_document_has_frontmatter() {
        let doc = Document::new(Frontmatter::new(), "body");
        assert!(!doc.has_frontmatter());

        let mut fm = Frontmatter::new();
        fm.insert("title", "T");
        let doc = Document::new(fm, "body");
        assert!(doc.has_frontmatter());
    }

    #[test]
    fn test_value_serde_untagged() {
        let scalar = serde_json::to_string(&Value::Scalar("x".to_string())).unwrap();
        assert_eq!(scalar, "\"x\"");

        let list = serde_json::to_string(&Value::List(vec!["a".to_string()])).unwrap();
        assert_eq!(list, "[\"a\"]");
    }
}
