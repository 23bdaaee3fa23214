//! Document CRUD service.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use signdesk_core::error::AppError;
use signdesk_core::result::AppResult;
use signdesk_core::types::DocumentId;
use signdesk_entity::document::{CreateDocument, Document, DocumentPatch};
use signdesk_store::traits::DocumentRepository;

/// Manages document creation, listing, editing, and deletion.
#[derive(Debug, Clone)]
pub struct DocumentService {
    /// Document repository.
    documents: Arc<dyn DocumentRepository>,
}

/// Request to create a document from an uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    /// Display title. Falls back to the original filename when blank.
    pub title: Option<String>,
    /// Name of the file as uploaded.
    pub original_filename: String,
    /// Where the stored file lives.
    pub file_path: String,
    /// File size in bytes.
    pub file_size: u64,
    /// Email of the client, if already known.
    pub client_email: Option<String>,
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(documents: Arc<dyn DocumentRepository>) -> Self {
        Self { documents }
    }

    /// Lists all documents, newest first.
    pub async fn list(&self) -> AppResult<Vec<Document>> {
        self.documents.find_all().await
    }

    /// Gets a document by id.
    pub async fn get(&self, id: DocumentId) -> AppResult<Document> {
        self.documents
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found"))
    }

    /// Creates a `draft` document from an uploaded file.
    pub async fn create_from_upload(&self, req: CreateDocumentRequest) -> AppResult<Document> {
        let original_filename = req.original_filename.trim();
        if original_filename.is_empty() {
            return Err(AppError::validation("Original filename is required"));
        }

        let title = req
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(original_filename)
            .to_string();

        let doc = Document::new(
            CreateDocument {
                title,
                original_filename: original_filename.to_string(),
                file_path: req.file_path,
                file_size: req.file_size,
                client_email: req.client_email.filter(|e| !e.trim().is_empty()),
                template_id: None,
            },
            Utc::now(),
        );
        let doc = self.documents.create(doc).await?;

        info!(
            document_id = %doc.id,
            title = %doc.title,
            file_size = doc.file_size,
            "Document created"
        );

        Ok(doc)
    }

    /// Applies an external patch. Always bumps `updated_at`.
    pub async fn update(&self, id: DocumentId, patch: DocumentPatch) -> AppResult<Document> {
        let doc = self
            .documents
            .update(id, Box::new(move |doc: &mut Document| patch.apply(doc)))
            .await?;

        info!(document_id = %id, "Document updated");
        Ok(doc)
    }

    /// Deletes a document and releases its signing token.
    pub async fn delete(&self, id: DocumentId) -> AppResult<()> {
        if !self.documents.delete(id).await? {
            return Err(AppError::not_found("Document not found"));
        }

        info!(document_id = %id, "Document deleted");
        Ok(())
    }
}
