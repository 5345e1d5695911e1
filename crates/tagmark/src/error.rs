//! Error types for color markup compilation.

use thiserror::Error;

/// Errors that can occur while resolving color markup tags.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// Tag name is not present in the tag table.
    #[error("unknown color tag: {0}")]
    UnknownTag(String),
}
