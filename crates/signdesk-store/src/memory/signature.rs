//! In-memory signature records.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use signdesk_core::error::AppError;
use signdesk_core::result::AppResult;
use signdesk_core::types::{SignatureId, UserId};
use signdesk_entity::signature::Signature;

use crate::traits::SignatureRepository;

/// Signature records keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemorySignatureStore {
    signatures: Arc<DashMap<SignatureId, Signature>>,
}

impl MemorySignatureStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SignatureRepository for MemorySignatureStore {
    async fn find_by_id(&self, id: SignatureId) -> AppResult<Option<Signature>> {
        Ok(self.signatures.get(&id).map(|s| s.value().clone()))
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Signature>> {
        let mut signatures: Vec<Signature> = self
            .signatures
            .iter()
            .filter(|entry| entry.user_id == Some(user_id))
            .map(|entry| entry.value().clone())
            .collect();
        signatures.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(signatures)
    }

    async fn create(&self, signature: Signature) -> AppResult<Signature> {
        match self.signatures.entry(signature.id) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Signature {} already exists",
                signature.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(signature.clone());
                Ok(signature)
            }
        }
    }
}
