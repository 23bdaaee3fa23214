//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use signdesk_core::types::UserId;
use signdesk_entity::document::DocumentPatch;

/// Create-document request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    /// Display title. Defaults to the original filename.
    pub title: Option<String>,
    /// Name of the uploaded file.
    #[validate(length(min = 1, message = "Original filename is required"))]
    pub original_filename: String,
    /// Stored file path.
    #[validate(length(min = 1, message = "File path is required"))]
    pub file_path: String,
    /// File size in bytes.
    pub file_size: u64,
    /// Client email.
    pub client_email: Option<String>,
}

impl From<CreateDocumentRequest> for signdesk_service::CreateDocumentRequest {
    fn from(req: CreateDocumentRequest) -> Self {
        Self {
            title: req.title,
            original_filename: req.original_filename,
            file_path: req.file_path,
            file_size: req.file_size,
            client_email: req.client_email,
        }
    }
}

/// Patch-document request body. Only `title` and `clientEmail` are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateDocumentRequest {
    /// New title.
    pub title: Option<String>,
    /// New client email; `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub client_email: Option<Option<String>>,
}

impl From<UpdateDocumentRequest> for DocumentPatch {
    fn from(req: UpdateDocumentRequest) -> Self {
        Self {
            title: req.title,
            client_email: req.client_email,
        }
    }
}

/// Generate-link request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLinkRequest {
    /// Email of the client who will sign.
    #[validate(email(message = "A valid client email is required"))]
    pub client_email: String,
}

/// Sign-document request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignDocumentRequest {
    /// Opaque signature payload.
    #[serde(default)]
    pub signature_data: serde_json::Value,
}

/// Use-template request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseTemplateRequest {
    /// Title override.
    pub title: Option<String>,
    /// Client email.
    pub client_email: Option<String>,
}

impl From<UseTemplateRequest> for signdesk_service::UseTemplateRequest {
    fn from(req: UseTemplateRequest) -> Self {
        Self {
            title: req.title,
            client_email: req.client_email,
        }
    }
}

/// Template list query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateQuery {
    /// Exact category name.
    pub category: Option<String>,
}

/// Create-signature request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSignatureRequest {
    /// Owning user.
    pub user_id: Option<UserId>,
    /// Base64 signature image.
    #[validate(length(min = 1, message = "Signature data is required"))]
    pub signature_data: String,
    /// Typed signature text.
    pub signature_text: Option<String>,
}

impl From<CreateSignatureRequest> for signdesk_service::CreateSignatureRequest {
    fn from(req: CreateSignatureRequest) -> Self {
        Self {
            user_id: req.user_id,
            signature_data: req.signature_data,
            signature_text: req.signature_text,
        }
    }
}

/// Distinguishes an absent field from an explicit `null`.
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
