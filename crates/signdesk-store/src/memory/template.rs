//! In-memory template catalog.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use signdesk_core::error::AppError;
use signdesk_core::result::AppResult;
use signdesk_core::types::TemplateId;
use signdesk_entity::template::{Template, TemplateCategory};

use crate::traits::TemplateRepository;

/// Template catalog kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    templates: Arc<RwLock<Vec<Template>>>,
}

impl MemoryTemplateStore {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TemplateRepository for MemoryTemplateStore {
    async fn find_all(&self) -> AppResult<Vec<Template>> {
        Ok(self.templates.read().await.clone())
    }

    async fn find_by_category(&self, category: TemplateCategory) -> AppResult<Vec<Template>> {
        Ok(self
            .templates
            .read()
            .await
            .iter()
            .filter(|t| t.category == category)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: TemplateId) -> AppResult<Option<Template>> {
        Ok(self
            .templates
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn create(&self, template: Template) -> AppResult<Template> {
        let mut templates = self.templates.write().await;
        if templates.iter().any(|t| t.id == template.id) {
            return Err(AppError::conflict(format!(
                "Template {} already exists",
                template.id
            )));
        }
        templates.push(template.clone());
        Ok(template)
    }
}
