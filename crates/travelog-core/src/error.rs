//! Error types for Travelog core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for Travelog operations.
pub type Result<T> = std::result::Result<T, JournalError>;

/// Core error type for Travelog operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// A required form field was empty after trimming
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// Attached image exceeds the size limit
    #[error("Image is too large: {size} bytes (limit {limit} bytes)")]
    ImageTooLarge { size: u64, limit: u64 },

    /// Attached file is not a recognized image type
    #[error("Unsupported image type: {0}")]
    UnsupportedImage(String),

    /// Reading or encoding the attached image failed
    #[error("Image encoding failed: {0}")]
    ImageEncoding(String),

    /// Stored blob could not be parsed
    #[error("Malformed persisted data: {0}")]
    MalformedPersistedData(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// No id is left above the largest stored one
    #[error("No entry id is available after {0}")]
    IdOverflow(i64),

    /// Entries could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl JournalError {
    /// Whether this error came from validating form input.
    ///
    /// Validation failures abort a submission before anything is written.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            JournalError::MissingRequiredField(_)
                | JournalError::ImageTooLarge { .. }
                | JournalError::UnsupportedImage(_)
                | JournalError::ImageEncoding(_)
        )
    }
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        JournalError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        JournalError::Serialization(err.to_string())
    }
}
