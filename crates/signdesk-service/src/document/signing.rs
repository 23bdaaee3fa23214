//! Signing link issuance and redemption.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use validator::ValidateEmail;

use signdesk_core::error::AppError;
use signdesk_core::result::AppResult;
use signdesk_core::types::DocumentId;
use signdesk_entity::document::Document;
use signdesk_store::traits::DocumentRepository;

use super::link::LinkService;

/// Message returned for any token that does not resolve.
const LINK_NOT_FOUND: &str = "Document not found or link expired";

/// Drives a document through `draft -> pending -> signed`.
#[derive(Debug, Clone)]
pub struct SigningService {
    /// Document repository.
    documents: Arc<dyn DocumentRepository>,
    /// Token generator and URL builder.
    links: Arc<LinkService>,
}

/// A freshly issued signing link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningLink {
    /// URL to send to the client.
    pub signing_url: String,
    /// The document after the link was issued.
    pub document: Document,
}

impl SigningService {
    /// Creates a new signing service.
    pub fn new(documents: Arc<dyn DocumentRepository>, links: Arc<LinkService>) -> Self {
        Self { documents, links }
    }

    /// Issues a new signing token for a document, replacing any previous one.
    pub async fn generate_link(
        &self,
        id: DocumentId,
        client_email: &str,
    ) -> AppResult<SigningLink> {
        let client_email = client_email.trim().to_string();
        if client_email.is_empty() {
            return Err(AppError::validation("Client email is required"));
        }
        if !client_email.validate_email() {
            return Err(AppError::validation(format!(
                "Invalid client email: '{client_email}'"
            )));
        }

        let token = self.links.generate_token();
        let issued = token.clone();
        let document = self
            .documents
            .update(
                id,
                Box::new(move |doc: &mut Document| doc.issue_link(issued, client_email)),
            )
            .await
            .inspect_err(|e| warn!(document_id = %id, error = %e, "Signing link rejected"))?;

        info!(
            document_id = %id,
            status = %document.status,
            "Signing link issued"
        );

        Ok(SigningLink {
            signing_url: self.links.signing_url(&token),
            document,
        })
    }

    /// Finds the document currently holding a token.
    pub async fn resolve(&self, token: &str) -> AppResult<Document> {
        self.documents
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found(LINK_NOT_FOUND))
    }

    /// Records a signature against the document holding `token`.
    pub async fn sign(&self, token: &str, signature_data: serde_json::Value) -> AppResult<Document> {
        let current = self.resolve(token).await?;
        let id = current.id;

        let expected = token.to_string();
        let document = self
            .documents
            .update(
                id,
                Box::new(move |doc: &mut Document| {
                    // The token may have been rotated since it was resolved.
                    if doc.secure_token.as_deref() != Some(expected.as_str()) {
                        return Err(AppError::not_found(LINK_NOT_FOUND));
                    }
                    doc.sign(signature_data, Utc::now())
                }),
            )
            .await
            .inspect_err(|e| warn!(document_id = %id, error = %e, "Signature rejected"))?;

        info!(document_id = %id, status = %document.status, "Document signed");
        Ok(document)
    }
}
