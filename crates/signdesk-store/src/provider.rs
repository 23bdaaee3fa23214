//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use tracing::info;

use signdesk_core::config::StoreConfig;
use signdesk_core::error::AppError;
use signdesk_core::result::AppResult;

use crate::traits::{DocumentRepository, SignatureRepository, TemplateRepository, UserRepository};

/// Bundle of repositories backed by one provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// Document records.
    pub documents: Arc<dyn DocumentRepository>,
    /// Template catalog.
    pub templates: Arc<dyn TemplateRepository>,
    /// Signature records.
    pub signatures: Arc<dyn SignatureRepository>,
    /// User accounts.
    pub users: Arc<dyn UserRepository>,
}

impl StoreManager {
    /// Create the stores from configuration, seeding templates if enabled.
    pub async fn new(config: &StoreConfig) -> AppResult<Self> {
        let manager = match config.provider.as_str() {
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory store provider");
                Self::memory()
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: memory"
                )));
            }
        };

        if config.seed_templates {
            crate::seed::seed_templates(manager.templates.as_ref()).await?;
        }

        Ok(manager)
    }

    /// Empty in-memory stores.
    #[cfg(feature = "memory")]
    pub fn memory() -> Self {
        use crate::memory::{
            MemoryDocumentStore, MemorySignatureStore, MemoryTemplateStore, MemoryUserStore,
        };

        Self {
            documents: Arc::new(MemoryDocumentStore::new()),
            templates: Arc::new(MemoryTemplateStore::new()),
            signatures: Arc::new(MemorySignatureStore::new()),
            users: Arc::new(MemoryUserStore::new()),
        }
    }
}
