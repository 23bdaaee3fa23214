//! Signature record service.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use signdesk_core::error::AppError;
use signdesk_core::result::AppResult;
use signdesk_core::types::{SignatureId, UserId};
use signdesk_entity::signature::{CreateSignature, Signature};
use signdesk_store::traits::SignatureRepository;

/// Stores and retrieves signature records.
#[derive(Debug, Clone)]
pub struct SignatureService {
    signatures: Arc<dyn SignatureRepository>,
}

/// Request to store a signature record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSignatureRequest {
    /// Owning user.
    pub user_id: Option<UserId>,
    /// Base64 signature image.
    pub signature_data: String,
    /// Typed signature text.
    pub signature_text: Option<String>,
}

impl SignatureService {
    /// Creates a new signature service.
    pub fn new(signatures: Arc<dyn SignatureRepository>) -> Self {
        Self { signatures }
    }

    /// Stores a new signature record.
    pub async fn create(&self, req: CreateSignatureRequest) -> AppResult<Signature> {
        if req.signature_data.trim().is_empty() {
            return Err(AppError::validation("Signature data is required"));
        }

        let signature = Signature::new(
            CreateSignature {
                user_id: req.user_id,
                signature_data: req.signature_data,
                signature_text: req.signature_text.filter(|t| !t.trim().is_empty()),
            },
            Utc::now(),
        );
        let signature = self.signatures.create(signature).await?;

        info!(signature_id = %signature.id, "Signature stored");
        Ok(signature)
    }

    /// Gets a signature record by id.
    pub async fn get(&self, id: SignatureId) -> AppResult<Signature> {
        self.signatures
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Signature not found"))
    }

    /// All signature records of a user, newest first.
    pub async fn list_by_user(&self, user_id: UserId) -> AppResult<Vec<Signature>> {
        self.signatures.find_by_user(user_id).await
    }
}
