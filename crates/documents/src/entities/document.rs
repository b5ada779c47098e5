use serde::{Deserialize, Serialize};

/// Represents a managed document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Stable identifier, generated at creation time
    pub id: String,
    /// Document title
    pub title: String,
    /// Textual content
    pub content: String,
    /// Id of the creating user. A reference, not ownership: the creator
    /// may be deleted while the document lives on.
    pub created_by: String,
    /// Creation timestamp (RFC3339)
    pub created_at: String,
    /// Last mutation timestamp (RFC3339), refreshed on every update
    pub updated_at: String,
    /// File-extension tag ("pdf", "docx", ...)
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Size in bytes
    pub size: u64,
    /// Publication status
    pub status: DocumentStatus,
}

/// Document status enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Draft,
    Published,
    Archived,
}

impl From<&str> for DocumentStatus {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "published" => DocumentStatus::Published,
            "archived" => DocumentStatus::Archived,
            _ => DocumentStatus::Draft,
        }
    }
}

impl From<DocumentStatus> for String {
    fn from(status: DocumentStatus) -> Self {
        match status {
            DocumentStatus::Draft => "draft".to_string(),
            DocumentStatus::Published => "published".to_string(),
            DocumentStatus::Archived => "archived".to_string(),
        }
    }
}

/// Request to create a new document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    /// Document title
    pub title: String,
    /// Textual content
    pub content: String,
    /// File-extension tag
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Size in bytes
    pub size: u64,
    /// Initial status (defaults to draft)
    pub status: Option<DocumentStatus>,
}

/// Request to update a document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentRequest {
    /// New title (optional)
    pub title: Option<String>,
    /// New content (optional)
    pub content: Option<String>,
    /// New file-extension tag (optional)
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    /// New size in bytes (optional)
    pub size: Option<u64>,
    /// New status (optional)
    pub status: Option<DocumentStatus>,
}

impl CreateDocumentRequest {
    /// Validate the create request
    pub fn validate(&self) -> Result<(), String> {
        validate_title(&self.title)?;
        validate_doc_type(&self.doc_type)?;
        Ok(())
    }
}

impl UpdateDocumentRequest {
    /// Validate the update request
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref title) = self.title {
            validate_title(title)?;
        }

        if let Some(ref doc_type) = self.doc_type {
            validate_doc_type(doc_type)?;
        }

        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title cannot be empty".to_string());
    }

    if title.len() > 200 {
        return Err("Title too long (max 200 characters)".to_string());
    }

    Ok(())
}

fn validate_doc_type(doc_type: &str) -> Result<(), String> {
    if doc_type.trim().is_empty() {
        return Err("Document type cannot be empty".to_string());
    }

    Ok(())
}
