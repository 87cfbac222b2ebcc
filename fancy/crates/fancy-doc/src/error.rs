//! Error types for fancy-doc.

use thiserror::Error;

/// Error type for document edits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// The edit names a line the document does not have.
    #[error("Line out of range: index {index}, document has {len} lines")]
    LineOutOfRange {
        /// The requested line index.
        index: usize,
        /// The number of lines in the document.
        len: usize,
    },
}

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
