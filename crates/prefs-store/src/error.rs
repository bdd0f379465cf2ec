//! Error types for preferences file operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing a preferences file.
///
/// Malformed file *content* is not an error: the reader reports it through
/// [`LoadOutcome::InvalidFormat`](crate::LoadOutcome) so the caller can fall
/// back to defaults. These variants cover genuine I/O failures and values
/// that cannot be represented in the file encoding.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("failed to {operation} preferences file {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Atomic write failed (temp file could not be renamed over the target).
    #[error("failed to replace preferences file {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key contains characters the line encoding cannot carry.
    #[error("preference key {key:?} cannot be written (contains '=' or a line break)")]
    UnwritableKey { key: String },
}

impl StoreError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
