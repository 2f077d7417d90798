//! # foliomd
//!
//! Content extraction library for Markdown/MDX portfolio sites.
//!
//! This library splits frontmatter metadata from document bodies, segments
//! resume documents into typed sections, and loads content collections
//! (blog posts, projects) and site configuration from disk.
//!
//! ## Quick Start
//!
//! ```
//! use foliomd::{parse_str, parser::parse_resume};
//!
//! let doc = parse_str("---\ntitle: \"My Resume\"\n---\n## Experience\n### Engineer\n- Shipped things\n");
//! assert_eq!(doc.frontmatter.str("title"), Some("My Resume"));
//!
//! let resume = parse_resume(&doc.body);
//! assert_eq!(resume.sections.len(), 1);
//! ```
//!
//! ## Features
//!
//! - **Lenient parsing**: malformed metadata degrades to defaults, never errors
//! - **Typed resume model**: experience, education, skills, projects sections
//! - **Inline span model**: bold, italic, and code as structured spans
//! - **Content collections**: `<root>/<slug>/index.mdx` directory layout
//! - **Multiple output formats**: JSON, HTML fragments, plain text
//! - **Parallel loading**: uses Rayon for multi-entry collections

pub mod collection;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use collection::{
    blog_post_by_slug, load_blog_posts, load_projects, project_by_slug, slugify,
};
pub use config::SiteConfig;
pub use error::{Error, Result};
pub use model::{
    BlogPost, Document, Frontmatter, InlineSpan, Project, Resume, ResumeItem, ResumeSection,
    RichText, SectionKind, Value,
};
pub use parser::ParseOptions;
pub use render::JsonFormat;

use std::fs;
use std::path::Path;

/// Split raw text into frontmatter and body.
///
/// Infallible: text without a frontmatter block yields an empty mapping and
/// an unchanged body.
///
/// # Example
///
/// ```
/// let doc = foliomd::parse_str("---\ntitle: Hi\n---\nBody.");
/// assert_eq!(doc.body, "Body.");
/// ```
pub fn parse_str(text: &str) -> Document {
    parser::extract_frontmatter(text)
}

/// Read a content file and split it into frontmatter and body.
///
/// # Example
///
/// ```no_run
/// let doc = foliomd::parse_file("content/blog/hello/index.mdx").unwrap();
/// println!("{} keys", doc.frontmatter.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let raw = fs::read_to_string(path)?;
    Ok(parser::extract_frontmatter(&raw))
}

/// Parse resume text (frontmatter plus body) into typed sections.
///
/// # Example
///
/// ```
/// use foliomd::SectionKind;
///
/// let resume = foliomd::parse_resume_str("## Skills\n**Languages**\n- Rust\n");
/// assert_eq!(resume.sections[0].kind, SectionKind::Skills);
/// ```
pub fn parse_resume_str(text: &str) -> Resume {
    let doc = parser::extract_frontmatter(text);
    parser::parse_resume(&doc.body)
}

/// Read a resume file and parse it into typed sections.
pub fn parse_resume_file<P: AsRef<Path>>(path: P) -> Result<Resume> {
    let raw = fs::read_to_string(path)?;
    Ok(parse_resume_str(&raw))
}

/// Builder for parsing content with configured options.
///
/// # Example
///
/// ```no_run
/// use foliomd::Foliomd;
///
/// let resume = Foliomd::new()
///     .raw_text()
///     .sequential()
///     .resume_file("content/resume.md")?;
/// # Ok::<(), foliomd::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Foliomd {
    options: ParseOptions,
}

impl Foliomd {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep resume text fields raw (no inline span transform).
    pub fn raw_text(mut self) -> Self {
        self.options = self.options.raw_text();
        self
    }

    /// Disable parallel collection loading.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Use content folder names verbatim as slugs.
    pub fn keep_folder_names(mut self) -> Self {
        self.options = self.options.keep_folder_names();
        self
    }

    /// Parse resume text with the configured options.
    pub fn resume(&self, text: &str) -> Resume {
        let doc = parser::extract_frontmatter(text);
        parser::parse_resume_with_options(&doc.body, &self.options)
    }

    /// Read and parse a resume file with the configured options.
    pub fn resume_file<P: AsRef<Path>>(&self, path: P) -> Result<Resume> {
        let raw = fs::read_to_string(path)?;
        Ok(self.resume(&raw))
    }

    /// Load a blog collection with the configured options.
    pub fn blog_posts<P: AsRef<Path>>(&self, root: P) -> Result<Vec<BlogPost>> {
        collection::load_blog_posts_with_options(root, &self.options)
    }

    /// Load a project collection with the configured options.
    pub fn projects<P: AsRef<Path>>(&self, root: P) -> Result<Vec<Project>> {
        collection::load_projects_with_options(root, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str_roundtrip() {
        let doc = parse_str("---\ntitle: Hi\ntech: [a, b]\n---\nBody text.");
        assert_eq!(doc.frontmatter.str("title"), Some("Hi"));
        assert_eq!(doc.frontmatter.list("tech").map(<[String]>::len), Some(2));
        assert_eq!(doc.body, "Body text.");
    }

    #[test]
    fn test_parse_resume_str_skips_frontmatter() {
        let resume = parse_resume_str("---\ntitle: Resume\n---\n## Experience\n### Job\n");
        assert_eq!(resume.sections.len(), 1);
        assert_eq!(resume.sections[0].kind, SectionKind::Experience);
    }

    #[test]
    fn test_builder_options_flow_through() {
        let resume = Foliomd::new()
            .raw_text()
            .resume("## Experience\n### Job\n- **kept raw**\n");
        let bullet = &resume.sections[0].items[0].description[0];
        assert_eq!(bullet.plain_text(), "**kept raw**");
    }

    #[test]
    fn test_parse_file_missing_path() {
        let result = parse_file("/definitely/not/a/real/path.mdx");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
