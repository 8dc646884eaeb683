//! Error types for metadata loading and catalog access.

use thiserror::Error;

/// Error type for metadata operations.
#[derive(Debug, Error)]
pub enum MetaError {
    /// XML parsing error while loading documentation.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Malformed documentation structure.
    #[error("invalid documentation structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },
}

impl MetaError {
    /// Creates an invalid-structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}
