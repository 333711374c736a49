//! Error types for blob storage operations.

use thiserror::Error;

/// Errors that can occur while reading or writing persisted blobs.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Browser storage unavailable or rejected the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// No directory could be determined for file-backed storage
    #[error("No data directory available")]
    NoDataDir,
}

impl StoreError {
    /// Create a storage error with a message.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}
