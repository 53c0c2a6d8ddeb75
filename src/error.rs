// src/error.rs
//! Application error types with structured error handling.
//!
//! Errors only exist at the edges: reading input documents, resolving
//! configuration and delivering output. Rendering and extraction are total
//! functions and never produce an `AppError`.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error for {path}: {source}")]
    JsonParseError {
        path: std::path::PathBuf,
        source: serde_json::Error,
    },

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedDocument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValidationError;

    #[test]
    fn test_delivery_failure_lists_every_cause() {
        let err = AppError::DeliveryFailed {
            failures: vec!["disk full".to_string(), "permission denied".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Output delivery failed: disk full, permission denied"
        );
    }

    #[test]
    fn test_validation_errors_are_transparent() {
        let err: AppError = ValidationError::EmptyField("title").into();
        assert_eq!(err.to_string(), "Empty required field: title");
    }

    #[test]
    fn test_serde_errors_become_malformed_document() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            AppError::from(parse_err),
            AppError::MalformedDocument(_)
        ));
    }
}
