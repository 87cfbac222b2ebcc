//! Error handling module for the fancyt CLI.
//!
//! All command failures are reported through [`FancytError`], which `main`
//! returns so that a failing command exits non-zero.

use thiserror::Error;

/// Main error type for the fancyt CLI application.
#[derive(Error, Debug)]
pub enum FancytError {
    /// The configuration file is missing, malformed or unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A source or output file could not be read or written.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Arguments or configuration values were rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A command ran but reported failure, such as problems found by `check`.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using FancytError.
pub type Result<T> = std::result::Result<T, FancytError>;
