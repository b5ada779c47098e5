//! Error types for the storage layer.

use thiserror::Error;

/// Storage-level errors.
///
/// Malformed data read back from a backend is never reported through this
/// type; lenient fallback to seed or empty happens in [`crate::Store`].
/// These variants cover write and encoding failures only.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
