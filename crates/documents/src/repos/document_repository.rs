//! Document repository over the documents collection.

use std::time::Duration;

use chrono::Utc;
use docdesk_store::Store;
use docdesk_users::SessionRepository;
use tracing::{info, warn};

use crate::entities::{CreateDocumentRequest, Document, DocumentStatus, UpdateDocumentRequest};
use crate::types::{DocumentError, DocumentResult};

/// Storage key of the documents collection.
pub const DOCUMENTS_COLLECTION: &str = "docdesk_documents";

const LIST_DELAY: Duration = Duration::from_millis(700);
const FETCH_DELAY: Duration = Duration::from_millis(500);
const CREATE_DELAY: Duration = Duration::from_millis(1000);
const WRITE_DELAY: Duration = Duration::from_millis(800);

/// Repository for document operations.
///
/// Creation requires an active session; a rejected operation never mutates
/// the store.
#[derive(Clone)]
pub struct DocumentRepository {
    store: Store,
    sessions: SessionRepository,
}

impl DocumentRepository {
    pub fn new(store: Store) -> Self {
        let sessions = SessionRepository::new(store.clone());
        Self { store, sessions }
    }

    /// List all documents.
    pub async fn list(&self) -> DocumentResult<Vec<Document>> {
        self.store.latency().simulate(LIST_DELAY).await;
        Ok(self.store.load_collection(DOCUMENTS_COLLECTION)?)
    }

    /// Fetch a document by id.
    pub async fn get(&self, id: &str) -> DocumentResult<Document> {
        self.store.latency().simulate(FETCH_DELAY).await;

        let documents: Vec<Document> = self.store.load_collection(DOCUMENTS_COLLECTION)?;
        documents
            .into_iter()
            .find(|document| document.id == id)
            .ok_or(DocumentError::NotFound)
    }

    /// Create a new document on behalf of the current session's user.
    ///
    /// `created_at` and `updated_at` are stamped to the same instant;
    /// the status defaults to draft when the request leaves it unset.
    pub async fn create(&self, request: CreateDocumentRequest) -> DocumentResult<Document> {
        self.store.latency().simulate(CREATE_DELAY).await;

        let creator = self
            .sessions
            .current()?
            .ok_or(DocumentError::Unauthenticated)?;
        request.validate().map_err(DocumentError::Validation)?;

        let mut documents: Vec<Document> = self.store.load_collection(DOCUMENTS_COLLECTION)?;

        let now = Utc::now().to_rfc3339();
        let document = Document {
            id: cuid2::create_id(),
            title: request.title,
            content: request.content,
            created_by: creator.id,
            created_at: now.clone(),
            updated_at: now,
            doc_type: request.doc_type,
            size: request.size,
            status: request.status.unwrap_or(DocumentStatus::Draft),
        };

        documents.push(document.clone());
        self.store.save_collection(DOCUMENTS_COLLECTION, &documents)?;

        info!(document = %document.id, title = %document.title, "created document");
        Ok(document)
    }

    /// Shallow-merge `request` over an existing document.
    ///
    /// `updated_at` is refreshed even when no semantic field changed.
    pub async fn update(&self, id: &str, request: UpdateDocumentRequest) -> DocumentResult<Document> {
        self.store.latency().simulate(WRITE_DELAY).await;
        request.validate().map_err(DocumentError::Validation)?;

        let mut documents: Vec<Document> = self.store.load_collection(DOCUMENTS_COLLECTION)?;
        let index = documents
            .iter()
            .position(|document| document.id == id)
            .ok_or(DocumentError::NotFound)?;

        let document = &mut documents[index];
        if let Some(title) = request.title {
            document.title = title;
        }
        if let Some(content) = request.content {
            document.content = content;
        }
        if let Some(doc_type) = request.doc_type {
            document.doc_type = doc_type;
        }
        if let Some(size) = request.size {
            document.size = size;
        }
        if let Some(status) = request.status {
            document.status = status;
        }
        document.updated_at = Utc::now().to_rfc3339();
        let updated = document.clone();

        self.store.save_collection(DOCUMENTS_COLLECTION, &documents)?;

        info!(document = %updated.id, "updated document");
        Ok(updated)
    }

    /// Delete a document.
    pub async fn delete(&self, id: &str) -> DocumentResult<()> {
        self.store.latency().simulate(WRITE_DELAY).await;

        let mut documents: Vec<Document> = self.store.load_collection(DOCUMENTS_COLLECTION)?;
        let before = documents.len();
        documents.retain(|document| document.id != id);
        if documents.len() == before {
            return Err(DocumentError::NotFound);
        }

        self.store.save_collection(DOCUMENTS_COLLECTION, &documents)?;

        warn!(document = %id, "deleted document");
        Ok(())
    }
}
