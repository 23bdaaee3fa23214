//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use signdesk_core::error::AppError;
use signdesk_core::result::AppResult;
use signdesk_core::types::{DocumentId, TemplateId};

use super::status::DocumentStatus;

/// A PDF moving through the draft → pending → signed lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique document identifier.
    pub id: DocumentId,
    /// Display title.
    pub title: String,
    /// Name of the file as uploaded.
    pub original_filename: String,
    /// Where the PDF lives.
    pub file_path: String,
    /// File size in bytes.
    pub file_size: u64,
    /// Lifecycle status.
    pub status: DocumentStatus,
    /// Email of the client asked to sign.
    pub client_email: Option<String>,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When the document was last mutated.
    pub updated_at: DateTime<Utc>,
    /// When the document was signed.
    pub signed_at: Option<DateTime<Utc>>,
    /// Signature payload submitted by the client.
    pub signature_data: Option<serde_json::Value>,
    /// Bearer token embedded in the signing link.
    pub secure_token: Option<String>,
    /// Template this document was instantiated from.
    pub template_id: Option<TemplateId>,
}

impl Document {
    /// Build a fresh `draft` document.
    pub fn new(data: CreateDocument, now: DateTime<Utc>) -> Self {
        Self {
            id: DocumentId::new(),
            title: data.title,
            original_filename: data.original_filename,
            file_path: data.file_path,
            file_size: data.file_size,
            status: DocumentStatus::Draft,
            client_email: data.client_email,
            created_at: now,
            updated_at: now,
            signed_at: None,
            signature_data: None,
            secure_token: None,
            template_id: data.template_id,
        }
    }

    /// Bump `updated_at`, never moving it backwards.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.updated_at {
            self.updated_at = now;
        }
    }

    /// Issue a new signing token, replacing any previous one.
    ///
    /// Moves the document to `pending` and records the client email.
    pub fn issue_link(&mut self, token: String, client_email: String) -> AppResult<()> {
        if !self.status.can_issue_link() {
            return Err(AppError::invalid_state(format!(
                "Cannot generate a signing link for a {} document",
                self.status
            )));
        }
        self.secure_token = Some(token);
        self.client_email = Some(client_email);
        self.status = DocumentStatus::Pending;
        Ok(())
    }

    /// Record the client's signature and move the document to `signed`.
    pub fn sign(&mut self, signature_data: serde_json::Value, now: DateTime<Utc>) -> AppResult<()> {
        if self.status.is_terminal() {
            return Err(AppError::invalid_state("Document has already been signed"));
        }
        if !self.status.can_sign() {
            return Err(AppError::invalid_state(format!(
                "Cannot sign a {} document",
                self.status
            )));
        }
        if is_blank_payload(&signature_data) {
            return Err(AppError::validation("Signature data is required"));
        }
        self.signature_data = Some(signature_data);
        self.status = DocumentStatus::Signed;
        self.signed_at = Some(now);
        Ok(())
    }

    /// Whether `signed_at` is set exactly when the status is `signed`.
    pub fn is_consistent(&self) -> bool {
        (self.status == DocumentStatus::Signed) == self.signed_at.is_some()
    }
}

/// Data required to create a new document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Display title.
    pub title: String,
    /// Name of the file as uploaded.
    pub original_filename: String,
    /// Where the PDF lives.
    pub file_path: String,
    /// File size in bytes.
    pub file_size: u64,
    /// Email of the client, if already known.
    pub client_email: Option<String>,
    /// Source template, if any.
    pub template_id: Option<TemplateId>,
}

/// Null, blank strings, and empty collections do not count as a signature.
pub fn is_blank_payload(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.trim().is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}
