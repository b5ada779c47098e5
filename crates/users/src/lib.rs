//! # Docdesk Users Crate
//!
//! User directory management for the Docdesk core: the [`User`] entity and
//! its request types, the [`UserRepository`] CRUD surface with
//! case-insensitive email uniqueness, and the [`SessionRepository`] holding
//! the current-user marker.
//!
//! ## Architecture
//!
//! - **Entities**: domain models and request/validation types
//! - **Repos**: data access over the injected store handle
//! - **Types**: shared error types

pub mod entities;
pub mod repos;
pub mod types;
pub mod validation;

pub use entities::{CreateUserRequest, Role, UpdateUserRequest, User};
pub use repos::{SessionRepository, UserRepository, SESSION_KEY, USERS_COLLECTION};
pub use types::{UserError, UserResult};
