//! Template entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use signdesk_core::types::TemplateId;

use super::category::TemplateCategory;

/// Read-only reference document new documents can be instantiated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Unique template identifier.
    pub id: TemplateId,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: Option<String>,
    /// Category.
    pub category: TemplateCategory,
    /// Path of the template PDF.
    pub file_path: String,
    /// Path of the preview thumbnail.
    pub thumbnail_path: Option<String>,
    /// When the template was seeded.
    pub created_at: DateTime<Utc>,
}

impl Template {
    /// Build a template record.
    pub fn new(data: CreateTemplate, now: DateTime<Utc>) -> Self {
        Self {
            id: TemplateId::new(),
            title: data.title,
            description: data.description,
            category: data.category,
            file_path: data.file_path,
            thumbnail_path: data.thumbnail_path,
            created_at: now,
        }
    }

    /// File name given to documents created from this template.
    pub fn document_filename(&self) -> String {
        format!("{}.pdf", self.title)
    }
}

/// Data required to seed a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTemplate {
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: Option<String>,
    /// Category.
    pub category: TemplateCategory,
    /// Path of the template PDF.
    pub file_path: String,
    /// Path of the preview thumbnail.
    pub thumbnail_path: Option<String>,
}
