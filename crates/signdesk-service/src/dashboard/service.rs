//! Dashboard aggregation service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use signdesk_core::result::AppResult;
use signdesk_entity::document::{Document, DocumentStatus};
use signdesk_store::traits::DocumentRepository;

/// Summary counts over the document collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// All documents.
    pub total_documents: u64,
    /// Documents awaiting a signature.
    pub pending_signatures: u64,
    /// Signed documents.
    pub completed: u64,
    /// Documents created from a template.
    pub templates_used: u64,
}

impl DashboardStats {
    /// Count a snapshot of documents.
    pub fn from_documents<'a>(documents: impl IntoIterator<Item = &'a Document>) -> Self {
        documents
            .into_iter()
            .fold(Self::default(), |mut stats, doc| {
                stats.total_documents += 1;
                match doc.status {
                    DocumentStatus::Pending => stats.pending_signatures += 1,
                    DocumentStatus::Signed => stats.completed += 1,
                    DocumentStatus::Draft => {}
                }
                if doc.template_id.is_some() {
                    stats.templates_used += 1;
                }
                stats
            })
    }
}

/// Computes dashboard statistics on demand.
#[derive(Debug, Clone)]
pub struct DashboardService {
    /// Document repository.
    documents: Arc<dyn DocumentRepository>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(documents: Arc<dyn DocumentRepository>) -> Self {
        Self { documents }
    }

    /// Current statistics. Never cached.
    pub async fn stats(&self) -> AppResult<DashboardStats> {
        let documents = self.documents.find_all().await?;
        Ok(DashboardStats::from_documents(&documents))
    }
}
