//! Error types for emission.

use thiserror::Error;

/// Error type for rendering and file writing.
#[derive(Debug, Error)]
pub enum EmitError {
    /// IO error while writing generated files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The output location exists but is not a directory.
    #[error("output path '{path}' is not a directory")]
    NotADirectory {
        /// Offending path.
        path: String,
    },
}

impl EmitError {
    /// Creates a not-a-directory error.
    pub fn not_a_directory(path: impl Into<String>) -> Self {
        Self::NotADirectory { path: path.into() }
    }
}
