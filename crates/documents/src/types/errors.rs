//! Error types for the document library.

use docdesk_store::StoreError;
use thiserror::Error;

/// Document-related errors
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Document not found")]
    NotFound,

    #[error("You must be logged in to create a document")]
    Unauthenticated,

    #[error("Invalid document data: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;
