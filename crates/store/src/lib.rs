//! Docdesk Store Crate
//!
//! This crate provides the durable storage layer for the Docdesk core:
//! an injectable key-value backend keyed by logical collection name, a
//! typed [`Store`] handle with bootstrap seeding, and the latency switch
//! shared by every repository.
//!
//! Collections are persisted as serialized JSON arrays under their
//! collection key; singleton records (such as the current-session marker)
//! are persisted as serialized objects under their own key.

pub mod backend;
pub mod errors;
pub mod json;
pub mod latency;
pub mod memory;

pub use backend::{Store, StoreBackend, StoreBuilder};
pub use errors::{StoreError, StoreResult};
pub use json::JsonFileStore;
pub use latency::Latency;
pub use memory::MemoryStore;
