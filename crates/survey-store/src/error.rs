//! Store error types for survey-store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from template store operations.
///
/// `SectionNotFound` and `QuestionOutOfRange` are lookup misses; every other
/// variant is a persistence failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No section carries the requested name.
    #[error("Section not found")]
    SectionNotFound,

    /// The question index is negative or past the end of the section.
    #[error("Question index out of range")]
    QuestionOutOfRange,

    /// The template file could not be read.
    #[error("failed to read template {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The template file is not a valid survey document.
    #[error("failed to parse template {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The in-memory document could not be serialized.
    #[error("failed to serialize template: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The template file could not be written.
    #[error("failed to write template {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A thread panicked while holding the document or file lock.
    #[error("template lock poisoned")]
    Poisoned,
}

impl StoreError {
    /// Whether this error is a lookup miss rather than a persistence failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::SectionNotFound | Self::QuestionOutOfRange)
    }
}
