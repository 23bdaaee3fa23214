//! Built-in template catalog loaded at startup.

use chrono::Utc;
use tracing::info;

use signdesk_core::result::AppResult;
use signdesk_entity::template::{CreateTemplate, Template, TemplateCategory};

use crate::traits::TemplateRepository;

const CATALOG: &[(&str, &str, TemplateCategory, &str)] = &[
    (
        "Service Agreement",
        "Professional service contract template with signature fields",
        TemplateCategory::Contracts,
        "service-agreement",
    ),
    (
        "Non-Disclosure Agreement",
        "Standard NDA template for confidential business relationships",
        TemplateCategory::Ndas,
        "nda",
    ),
    (
        "Employment Contract",
        "Comprehensive employment agreement with terms and conditions",
        TemplateCategory::Contracts,
        "employment-contract",
    ),
    (
        "Freelance Contract",
        "Independent contractor agreement for project-based work",
        TemplateCategory::Contracts,
        "freelance-contract",
    ),
    (
        "Partnership Agreement",
        "Business partnership contract with profit sharing terms",
        TemplateCategory::Contracts,
        "partnership-agreement",
    ),
    (
        "Consulting Agreement",
        "Professional consulting services contract template",
        TemplateCategory::Contracts,
        "consulting-agreement",
    ),
];

/// The built-in templates, in catalog order.
pub fn default_templates() -> Vec<Template> {
    let now = Utc::now();
    CATALOG
        .iter()
        .map(|(title, description, category, slug)| {
            Template::new(
                CreateTemplate {
                    title: (*title).to_string(),
                    description: Some((*description).to_string()),
                    category: *category,
                    file_path: format!("/templates/{slug}.pdf"),
                    thumbnail_path: Some(format!("/templates/thumbs/{slug}.png")),
                },
                now,
            )
        })
        .collect()
}

/// Insert the built-in templates. Returns how many were added.
pub async fn seed_templates(repo: &dyn TemplateRepository) -> AppResult<usize> {
    let templates = default_templates();
    let count = templates.len();
    for template in templates {
        repo.create(template).await?;
    }
    info!(count, "Seeded template catalog");
    Ok(count)
}
