//! Error types for the helpdesk library.
//!
//! All fallible library operations return [`HelpdeskError`]. Failures that
//! belong to a single dialogue turn are modelled separately by
//! [`DialogueError`](crate::dialogue::DialogueError) and never surface here.
//!
//! # Examples
//!
//! ```
//! use helpdesk::error::{HelpdeskError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(HelpdeskError::training("corpus has no examples"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for helpdesk operations.
#[derive(Error, Debug)]
pub enum HelpdeskError {
    /// I/O errors (reading corpus, config or model files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary model snapshot errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus is empty or malformed
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Fitting the vectorizer or classifier failed
    #[error("Training error: {0}")]
    Training(String),

    /// A label that was not seen when the codec was fitted
    #[error("Unknown label: {0}")]
    UnknownLabel(String),

    /// A class id outside `[0, classes)`
    #[error("Invalid class id {id}: codec knows {classes} classes")]
    InvalidId { id: usize, classes: usize },

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with HelpdeskError.
pub type Result<T> = std::result::Result<T, HelpdeskError>;

impl HelpdeskError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        HelpdeskError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        HelpdeskError::Corpus(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        HelpdeskError::Training(msg.into())
    }

    /// Create a new unknown label error.
    pub fn unknown_label<S: Into<String>>(label: S) -> Self {
        HelpdeskError::UnknownLabel(label.into())
    }

    /// Create a new invalid configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        HelpdeskError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = HelpdeskError::training("no classes");
        assert_eq!(error.to_string(), "Training error: no classes");

        let error = HelpdeskError::unknown_label("vpn_issue");
        assert_eq!(error.to_string(), "Unknown label: vpn_issue");

        let error = HelpdeskError::InvalidId { id: 7, classes: 4 };
        assert_eq!(error.to_string(), "Invalid class id 7: codec knows 4 classes");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = HelpdeskError::from(io_error);

        match error {
            HelpdeskError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
