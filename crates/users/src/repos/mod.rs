//! Data access layer for the user directory.

pub mod session_repository;
pub mod user_repository;

pub use session_repository::{SessionRepository, SESSION_KEY};
pub use user_repository::{UserRepository, USERS_COLLECTION};
