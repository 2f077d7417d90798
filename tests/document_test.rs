//! Integration tests for frontmatter extraction and the document pipeline.

use foliomd::render::{to_json, JsonFormat};
use foliomd::{parse_str, Value};

const BLOG_POST: &str = r#"---
title: "Building a Lenient Parser"
excerpt: Why strict parsers lose content
date: 2024-05-20
readTime: 6 min
category: [Rust, Parsing]
image: ./images/cover.png
---
# Building a Lenient Parser

Strict parsers reject; lenient parsers degrade.
"#;

#[test]
fn test_blog_post_frontmatter() {
    let doc = parse_str(BLOG_POST);

    assert_eq!(doc.frontmatter.str("title"), Some("Building a Lenient Parser"));
    assert_eq!(
        doc.frontmatter.str("excerpt"),
        Some("Why strict parsers lose content")
    );
    assert_eq!(doc.frontmatter.str("readTime"), Some("6 min"));
    assert_eq!(
        doc.frontmatter.get("category"),
        Some(&Value::List(vec!["Rust".to_string(), "Parsing".to_string()]))
    );
    assert!(doc.body.starts_with("# Building a Lenient Parser"));
}

#[test]
fn test_no_frontmatter_is_identity() {
    let input = "# No metadata here\n\nJust prose.";
    let doc = parse_str(input);
    assert!(doc.frontmatter.is_empty());
    assert_eq!(doc.body, input);
}

#[test]
fn test_windows_line_endings() {
    let input = "---\r\ntitle: CRLF\r\n---\r\nbody line\r\nsecond line";
    let doc = parse_str(input);
    assert_eq!(doc.frontmatter.str("title"), Some("CRLF"));
    assert_eq!(doc.body, "body line\r\nsecond line");
}

#[test]
fn test_whitespace_before_block() {
    let doc = parse_str("\n   \n---\ntitle: Padded\n---\nbody");
    assert_eq!(doc.frontmatter.str("title"), Some("Padded"));
    assert_eq!(doc.body, "body");
}

#[test]
fn test_quoted_values_roundtrip_without_quotes() {
    let doc = parse_str("---\na: \"Hello\"\nb: 'World'\n---\n");
    assert_eq!(doc.frontmatter.str("a"), Some("Hello"));
    assert_eq!(doc.frontmatter.str("b"), Some("World"));
}

#[test]
fn test_unknown_keys_are_kept() {
    let doc = parse_str("---\nx-custom-key: anything\n---\n");
    assert!(doc.frontmatter.contains_key("x-custom-key"));
}

#[test]
fn test_document_serializes_to_json() {
    let doc = parse_str(BLOG_POST);
    let json = to_json(&doc, JsonFormat::Compact).unwrap();
    assert!(json.contains("\"frontmatter\""));
    assert!(json.contains("\"body\""));
    assert!(json.contains("Building a Lenient Parser"));
}

#[test]
fn test_file_loading() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("index.mdx");
    std::fs::write(&path, BLOG_POST).unwrap();

    let doc = foliomd::parse_file(&path).unwrap();
    assert_eq!(doc.frontmatter.str("title"), Some("Building a Lenient Parser"));
}
