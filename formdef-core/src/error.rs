//! Error types for formdef.
//!
//! Malformed input is an expected, recoverable case: it surfaces as a
//! [`FormError::Validation`] carrying the full defect report, never as a
//! panic or an early abort.

use std::path::PathBuf;

use thiserror::Error;

use crate::form::ValidationError;

/// The main error type for form loading and serialization.
#[derive(Error, Debug)]
pub enum FormError {
    /// I/O error reading a form file.
    #[error("failed to read form file '{path}': {source}")]
    Io {
        /// Path to the file that couldn't be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// JSON parse or serialization error.
    #[error("failed to process JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse or serialization error.
    #[error("failed to process YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Validation failed with one or more defects.
    #[error("{}", render_validation_errors(.errors))]
    Validation {
        /// The defects found, in document order.
        errors: Vec<ValidationError>,
    },

    /// A guard limit was exceeded before or during parsing.
    #[error("form limit exceeded: {error}")]
    LimitExceeded {
        /// The specific limit that was breached.
        error: ValidationError,
    },
}

/// Result type alias using [`FormError`].
pub type Result<T> = std::result::Result<T, FormError>;

fn render_validation_errors(errors: &[ValidationError]) -> String {
    use std::fmt::Write;

    let mut out = format!("form validation failed with {} error(s):", errors.len());
    for error in errors {
        let _ = write!(out, "\n  - {}", error);
    }
    out
}
