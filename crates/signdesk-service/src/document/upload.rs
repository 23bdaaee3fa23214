//! PDF upload: validate, write to the upload directory, create the document.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use signdesk_core::config::UploadConfig;
use signdesk_core::error::AppError;
use signdesk_core::result::AppResult;
use signdesk_entity::document::Document;

use super::service::{CreateDocumentRequest, DocumentService};

/// A file received from a multipart form.
#[derive(Debug, Clone)]
pub struct UploadParams {
    /// Client-supplied file name.
    pub file_name: Option<String>,
    /// Declared content type.
    pub content_type: Option<String>,
    /// File contents.
    pub data: Vec<u8>,
    /// Display title.
    pub title: Option<String>,
    /// Email of the client, if already known.
    pub client_email: Option<String>,
}

/// Stores uploaded PDFs and registers them as `draft` documents.
#[derive(Debug, Clone)]
pub struct UploadService {
    /// Document service used to create the record.
    documents: Arc<DocumentService>,
    /// Upload limits and destination.
    config: UploadConfig,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(documents: Arc<DocumentService>, config: UploadConfig) -> Self {
        Self { documents, config }
    }

    /// Upload directory.
    pub fn directory(&self) -> PathBuf {
        PathBuf::from(&self.config.directory)
    }

    /// Validates and stores a file, then creates its document.
    pub async fn upload(&self, params: UploadParams) -> AppResult<Document> {
        let content_type = params.content_type.as_deref().unwrap_or_default();
        if !self.config.accepts(content_type) {
            return Err(AppError::validation(format!(
                "Only PDF files are allowed (got '{content_type}')"
            )));
        }
        if params.data.is_empty() {
            return Err(AppError::validation("Uploaded file is empty"));
        }
        let size = params.data.len() as u64;
        if size > self.config.max_file_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds the maximum size of {} bytes",
                self.config.max_file_size_bytes
            )));
        }

        let original_filename = params
            .file_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "document.pdf".to_string());

        let dir = self.directory();
        tokio::fs::create_dir_all(&dir).await?;
        let path = dir.join(format!("{}.pdf", Uuid::new_v4()));
        tokio::fs::write(&path, &params.data).await?;
        let file_path = path.to_string_lossy().into_owned();

        let created = self
            .documents
            .create_from_upload(CreateDocumentRequest {
                title: params.title,
                original_filename,
                file_path: file_path.clone(),
                file_size: size,
                client_email: params.client_email,
            })
            .await;

        match created {
            Ok(doc) => {
                info!(document_id = %doc.id, path = %file_path, size, "PDF stored");
                Ok(doc)
            }
            Err(e) => {
                if let Err(cleanup) = tokio::fs::remove_file(&path).await {
                    warn!(path = %file_path, error = %cleanup, "Failed to remove orphaned upload");
                }
                Err(e)
            }
        }
    }
}
