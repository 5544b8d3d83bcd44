//! Error types and handling for restructure-resources
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Structural anomalies inside the grouped data are never errors; they are
//! dropped by the flattener. Only parse, serialization and I/O failures end up here.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for restructure operations
#[derive(Error, Diagnostic, Debug)]
pub enum RestructureError {
    // Parse errors
    #[error("Failed to parse YAML in {path}: {reason}")]
    #[diagnostic(
        code(restructure::parse::invalid_yaml),
        help("The input must be a single YAML document")
    )]
    ParseFailed { path: String, reason: String },

    #[error("Expected a mapping at the top level of {path}, found {found}")]
    #[diagnostic(
        code(restructure::parse::not_a_mapping),
        help("The input must map group keys such as 'v1/Pod' to resources")
    )]
    NotAMapping { path: String, found: &'static str },

    // Serialization errors
    #[error("Failed to serialize resource {kind}/{name}: {reason}")]
    #[diagnostic(code(restructure::write::serialize_failed))]
    SerializeFailed {
        kind: String,
        name: String,
        reason: String,
    },

    // File system errors
    #[error("Failed to read file {path}: {reason}")]
    #[diagnostic(code(restructure::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file {path}: {reason}")]
    #[diagnostic(
        code(restructure::fs::write_failed),
        help("The output file may be truncated")
    )]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(restructure::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for RestructureError {
    fn from(err: std::io::Error) -> Self {
        RestructureError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RestructureError>;
