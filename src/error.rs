//! Error types for the pii-eval library.

use thiserror::Error;

/// Result type for pii-eval operations.
pub type Result<T> = std::result::Result<T, PiiEvalError>;

/// Error types that can occur during span evaluation.
#[derive(Error, Debug)]
pub enum PiiEvalError {
    /// Error during JSON parsing or serialization.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error during YAML parsing or serialization.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Error during I/O operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid span coordinates (`end <= start`).
    #[error("Invalid span: {0}")]
    InvalidSpan(String),

    /// A provider pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}
