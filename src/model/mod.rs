//! Content model types produced by parsing.
//!
//! This module defines the intermediate representation that bridges raw
//! Markdown/MDX text and the consuming presentation layer: frontmatter
//! mappings, documents, inline spans, typed resume sections, and collection
//! entries.

mod content;
mod document;
mod resume;
mod span;

pub use content::{BlogPost, Project};
pub use document::{Document, Frontmatter, Value};
pub use resume::{Resume, ResumeItem, ResumeSection, SectionKind};
pub use span::{InlineSpan, RichText};
