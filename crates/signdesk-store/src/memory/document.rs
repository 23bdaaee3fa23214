//! In-memory document store with per-document locking and a token index.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::debug;

use signdesk_core::error::AppError;
use signdesk_core::result::AppResult;
use signdesk_core::types::DocumentId;
use signdesk_entity::document::Document;

use crate::traits::{DocumentMutation, DocumentRepository};

/// In-memory document store.
///
/// Records are replaced whole on every write. Each document id has its own
/// async mutex so read-modify-write cycles on one document are serialized
/// while different documents proceed independently. The token index is
/// updated under that same mutex; token lookups re-check the record so a
/// stale index entry never resolves.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    /// Primary records keyed by id.
    documents: Arc<DashMap<DocumentId, Document>>,
    /// Secure token to document id.
    tokens: Arc<DashMap<String, DocumentId>>,
    /// Per-document write locks.
    locks: Arc<DashMap<DocumentId, Arc<Mutex<()>>>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_for(&self, id: DocumentId) -> Arc<Mutex<()>> {
        self.locks.entry(id).or_default().value().clone()
    }

    /// Drops the lock entry for an id that holds no record, unless another
    /// task is still waiting on it.
    fn release_lock(&self, id: DocumentId) {
        if !self.documents.contains_key(&id) {
            self.locks
                .remove_if(&id, |_, lock| Arc::strong_count(lock) == 1);
        }
    }

    fn reindex_token(&self, id: DocumentId, old: Option<&str>, new: Option<&str>) {
        if old == new {
            return;
        }
        if let Some(new) = new {
            self.tokens.insert(new.to_string(), id);
        }
        if let Some(old) = old {
            self.tokens.remove_if(old, |_, owner| *owner == id);
        }
        debug!(document_id = %id, "Token index updated");
    }
}

#[async_trait]
impl DocumentRepository for MemoryDocumentStore {
    async fn find_by_id(&self, id: DocumentId) -> AppResult<Option<Document>> {
        Ok(self.documents.get(&id).map(|doc| doc.value().clone()))
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<Document>> {
        let Some(id) = self.tokens.get(token).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        Ok(self
            .documents
            .get(&id)
            .filter(|doc| doc.secure_token.as_deref() == Some(token))
            .map(|doc| doc.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<Document>> {
        let mut documents: Vec<Document> = self
            .documents
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(documents)
    }

    async fn create(&self, document: Document) -> AppResult<Document> {
        let id = document.id;
        let lock = self.lock_for(id);
        let _guard = lock.lock().await;

        if self.documents.contains_key(&id) {
            return Err(AppError::conflict(format!("Document {id} already exists")));
        }
        self.documents.insert(id, document.clone());
        self.reindex_token(id, None, document.secure_token.as_deref());

        debug!(document_id = %id, "Document stored");
        Ok(document)
    }

    async fn update(&self, id: DocumentId, mutation: DocumentMutation) -> AppResult<Document> {
        let lock = self.lock_for(id);
        let guard = lock.lock().await;

        let Some(current) = self.documents.get(&id).map(|doc| doc.value().clone()) else {
            drop(guard);
            drop(lock);
            self.release_lock(id);
            return Err(AppError::not_found("Document not found"));
        };

        let mut next = current.clone();
        mutation(&mut next)?;
        next.id = current.id;
        next.created_at = current.created_at;
        if !next.is_consistent() {
            return Err(AppError::internal(format!(
                "Mutation left document {id} {} with inconsistent signedAt",
                next.status
            )));
        }
        next.touch(Utc::now());

        self.documents.insert(id, next.clone());
        self.reindex_token(
            id,
            current.secure_token.as_deref(),
            next.secure_token.as_deref(),
        );

        Ok(next)
    }

    async fn delete(&self, id: DocumentId) -> AppResult<bool> {
        let lock = self.lock_for(id);
        let removed = {
            let _guard = lock.lock().await;
            let removed = self.documents.remove(&id).map(|(_, doc)| doc);
            if let Some(doc) = &removed {
                self.reindex_token(id, doc.secure_token.as_deref(), None);
            }
            removed
        };
        self.locks.remove(&id);

        debug!(document_id = %id, existed = removed.is_some(), "Document deleted");
        Ok(removed.is_some())
    }
}
