//! Frontmatter extraction.
//!
//! Splits a leading `---`-delimited metadata block from a document body. The
//! parser is lenient by design: input without a frontmatter block, or with
//! malformed metadata lines, degrades to defaults instead of erroring.
//!
//! The metadata syntax is YAML-like but deliberately minimal: flat
//! `key: value` pairs, one layer of optional quoting, and bracketed string
//! lists. No escaping and no nesting. A literal comma inside a quoted list
//! element, or a colon inside a value before the intended separator, is not
//! handled; matching that known limitation is part of the contract.

use crate::model::{Document, Frontmatter, Value};
use regex::Regex;
use std::sync::OnceLock;

/// Matches an optional leading delimiter block: leading whitespace, `---`,
/// the metadata lines, `---`, then the body. Tolerates CRLF.
fn block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)\A\s*---\r?\n(.*?)\r?\n---\r?\n(.*)\z")
            .expect("frontmatter regex is valid")
    })
}

/// Split raw text into frontmatter metadata and body.
///
/// When no delimiter block is present the result carries an empty mapping
/// and a body identical to the input.
///
/// # Example
///
/// ```
/// use foliomd::parser::extract_frontmatter;
///
/// let doc = extract_frontmatter("---\ntitle: \"Hello\"\n---\nBody here.");
/// assert_eq!(doc.frontmatter.str("title"), Some("Hello"));
/// assert_eq!(doc.body, "Body here.");
/// ```
pub fn extract_frontmatter(text: &str) -> Document {
    let Some(caps) = block_regex().captures(text) else {
        log::debug!("no frontmatter block found, using entire input as body");
        return Document::new(Frontmatter::new(), text);
    };

    let block = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str());

    let mut frontmatter = Frontmatter::new();
    for line in block.lines() {
        // A colon at position 0 (or no colon) makes the line meaningless.
        let Some(colon) = line.find(':').filter(|&i| i > 0) else {
            continue;
        };
        let key = line[..colon].trim();
        let value = parse_value(line[colon + 1..].trim());
        frontmatter.insert(key, value);
    }

    log::debug!("extracted {} frontmatter keys", frontmatter.len());
    Document::new(frontmatter, body)
}

/// Post-process a trimmed raw value: one layer of quote stripping, else
/// bracketed list parsing, else the scalar as-is.
fn parse_value(raw: &str) -> Value {
    if is_quoted(raw) {
        return Value::Scalar(raw[1..raw.len() - 1].to_string());
    }
    if raw.starts_with('[') && raw.ends_with(']') && raw.len() >= 2 {
        let items = raw[1..raw.len() - 1]
            .split(',')
            .map(|item| item.trim().replace(['\'', '"'], ""))
            .collect();
        return Value::List(items);
    }
    Value::Scalar(raw.to_string())
}

fn is_quoted(raw: &str) -> bool {
    raw.len() >= 2
        && ((raw.starts_with('"') && raw.ends_with('"'))
            || (raw.starts_with('\'') && raw.ends_with('\'')))
}
