//! Error types for the foliomd library.
//!
//! The text-processing core (frontmatter extraction, resume segmentation,
//! inline markup) is deliberately infallible: malformed input degrades to a
//! default instead of signaling failure. Errors only arise at the I/O and
//! serialization edges.

use std::io;
use thiserror::Error;

/// Result type alias for foliomd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering content.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading content files or directories.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A content entry was not found (by slug or path).
    #[error("Content not found: {0}")]
    NotFound(String),

    /// The site configuration is missing or structurally invalid.
    #[error("Invalid site configuration: {0}")]
    InvalidConfig(String),

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
