//! Error handling for sv.
//!
//! [`SvError`] is the main error enum for all sv operations. Non-fatal
//! conditions (duplicate adds, missing removals, unknown skill types on load)
//! are not errors; they surface as `tracing::warn!` events and the operation
//! completes.

use std::io;

use thiserror::Error;

/// Main error type for sv operations.
#[derive(Error, Debug)]
pub enum SvError {
    /// An entity failed semantic validation (level out of range, empty name).
    /// Aborts only the operation that triggered it; prior state is untouched.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The persisted document is not parseable JSON.
    #[error("Invalid data file: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Persistence(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias using SvError.
pub type Result<T> = std::result::Result<T, SvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_map_to_persistence() {
        let err: SvError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, SvError::Persistence(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn validation_message_is_preserved() {
        let err = SvError::Validation("skill level must be between 0 and 100".to_string());
        assert!(err.to_string().contains("between 0 and 100"));
    }
}
