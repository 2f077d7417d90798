//! Markdown/MDX parsing module.

mod frontmatter;
mod inline;
mod options;
mod resume;

pub use frontmatter::extract_frontmatter;
pub use inline::format_inline;
pub use options::ParseOptions;
pub use resume::{parse_resume, parse_resume_with_options};
