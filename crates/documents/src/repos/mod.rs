//! Data access layer for the document library.

pub mod document_repository;

pub use document_repository::{DocumentRepository, DOCUMENTS_COLLECTION};
