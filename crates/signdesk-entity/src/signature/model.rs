//! Signature record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use signdesk_core::types::{SignatureId, UserId};

/// A captured signature kept as an audit record, independent of any document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    /// Unique signature identifier.
    pub id: SignatureId,
    /// User the signature belongs to.
    pub user_id: Option<UserId>,
    /// Base64-encoded signature image.
    pub signature_data: String,
    /// Typed signature text.
    pub signature_text: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Signature {
    /// Build a signature record.
    pub fn new(data: CreateSignature, now: DateTime<Utc>) -> Self {
        Self {
            id: SignatureId::new(),
            user_id: data.user_id,
            signature_data: data.signature_data,
            signature_text: data.signature_text,
            created_at: now,
        }
    }
}

/// Data required to create a signature record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSignature {
    /// User the signature belongs to.
    pub user_id: Option<UserId>,
    /// Base64-encoded signature image.
    pub signature_data: String,
    /// Typed signature text.
    pub signature_text: Option<String>,
}
