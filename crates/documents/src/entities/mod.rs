//! Domain entities for the document library.

pub mod document;

pub use document::{CreateDocumentRequest, Document, DocumentStatus, UpdateDocumentRequest};
