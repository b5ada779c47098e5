//! Error types for the user directory.

use docdesk_store::StoreError;
use thiserror::Error;

/// User-related errors
#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("User with this email already exists")]
    DuplicateEmail,

    #[error("Invalid user data: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for user operations
pub type UserResult<T> = Result<T, UserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(UserError::NotFound.to_string(), "User not found");
        assert_eq!(
            UserError::DuplicateEmail.to_string(),
            "User with this email already exists"
        );
        assert_eq!(
            UserError::Validation("Email cannot be empty".to_string()).to_string(),
            "Invalid user data: Email cannot be empty"
        );
    }
}
