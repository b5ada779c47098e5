//! # Docdesk Documents Crate
//!
//! Document library for the Docdesk core: the [`Document`] entity, its
//! request types, and the [`DocumentRepository`] CRUD surface. Creation is
//! gated on an active session; every mutation refreshes the document's
//! `updated_at` stamp.

pub mod entities;
pub mod repos;
pub mod types;

pub use entities::{CreateDocumentRequest, Document, DocumentStatus, UpdateDocumentRequest};
pub use repos::{DocumentRepository, DOCUMENTS_COLLECTION};
pub use types::{DocumentError, DocumentResult};
