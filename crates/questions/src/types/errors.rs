//! Error types for the question board.

use docdesk_store::StoreError;
use thiserror::Error;

/// Question-related errors
#[derive(Debug, Error)]
pub enum QuestionError {
    #[error("Question not found")]
    NotFound,

    #[error("You must be logged in to take part in the Q&A board")]
    Unauthenticated,

    #[error("Invalid question data: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for question operations
pub type QuestionResult<T> = Result<T, QuestionError>;
