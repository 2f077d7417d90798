//! Rendering module for converting parsed content to output formats.

mod html;
mod json;
mod text;

pub use html::to_html;
pub use json::{to_json, JsonFormat};
pub use text::{resume_to_text, to_text};
