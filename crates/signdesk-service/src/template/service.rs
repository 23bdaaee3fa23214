//! Template service.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use signdesk_core::error::AppError;
use signdesk_core::result::AppResult;
use signdesk_core::types::TemplateId;
use signdesk_entity::document::{CreateDocument, Document};
use signdesk_entity::template::{Template, TemplateCategory};
use signdesk_store::traits::{DocumentRepository, TemplateRepository};

/// Lists templates and creates documents from them.
#[derive(Debug, Clone)]
pub struct TemplateService {
    /// Template catalog.
    templates: Arc<dyn TemplateRepository>,
    /// Document repository new documents are written to.
    documents: Arc<dyn DocumentRepository>,
}

/// Request to instantiate a template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseTemplateRequest {
    /// Title override. Defaults to the template title.
    pub title: Option<String>,
    /// Email of the client, if already known.
    pub client_email: Option<String>,
}

impl TemplateService {
    /// Creates a new template service.
    pub fn new(
        templates: Arc<dyn TemplateRepository>,
        documents: Arc<dyn DocumentRepository>,
    ) -> Self {
        Self {
            templates,
            documents,
        }
    }

    /// Lists templates, optionally filtered by an exact category name.
    ///
    /// An unrecognized category matches nothing.
    pub async fn list(&self, category: Option<&str>) -> AppResult<Vec<Template>> {
        match category {
            None => self.templates.find_all().await,
            Some(raw) => match raw.parse::<TemplateCategory>() {
                Ok(category) => self.templates.find_by_category(category).await,
                Err(_) => {
                    debug!(category = raw, "Unknown template category");
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Gets a template by id.
    pub async fn get(&self, id: TemplateId) -> AppResult<Template> {
        self.templates
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Template not found"))
    }

    /// Creates a `draft` document from a template.
    pub async fn use_template(
        &self,
        id: TemplateId,
        req: UseTemplateRequest,
    ) -> AppResult<Document> {
        let template = self.get(id).await?;

        let title = req
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| template.title.clone());

        let doc = Document::new(
            CreateDocument {
                title,
                original_filename: template.document_filename(),
                file_path: template.file_path.clone(),
                file_size: 0,
                client_email: req.client_email.filter(|e| !e.trim().is_empty()),
                template_id: Some(template.id),
            },
            Utc::now(),
        );
        let doc = self.documents.create(doc).await?;

        info!(
            document_id = %doc.id,
            template_id = %template.id,
            "Document created from template"
        );

        Ok(doc)
    }
}
