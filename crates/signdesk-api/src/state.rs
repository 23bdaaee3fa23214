//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use signdesk_core::config::AppConfig;
use signdesk_service::{
    DashboardService, DocumentService, LinkService, SignatureService, SigningService,
    TemplateService, UploadService,
};
use signdesk_store::StoreManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Process start, for uptime reporting
    pub started_at: Instant,

    /// Document CRUD service
    pub document_service: Arc<DocumentService>,
    /// Signing link issuance and redemption
    pub signing_service: Arc<SigningService>,
    /// PDF upload service
    pub upload_service: Arc<UploadService>,
    /// Template catalog and instantiation
    pub template_service: Arc<TemplateService>,
    /// Signature records
    pub signature_service: Arc<SignatureService>,
    /// Dashboard statistics
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    /// Wires every service over one set of stores.
    pub fn new(config: AppConfig, stores: &StoreManager) -> Self {
        let links = Arc::new(LinkService::new(config.signing.clone()));
        let document_service = Arc::new(DocumentService::new(Arc::clone(&stores.documents)));

        Self {
            signing_service: Arc::new(SigningService::new(
                Arc::clone(&stores.documents),
                links,
            )),
            upload_service: Arc::new(UploadService::new(
                Arc::clone(&document_service),
                config.upload.clone(),
            )),
            template_service: Arc::new(TemplateService::new(
                Arc::clone(&stores.templates),
                Arc::clone(&stores.documents),
            )),
            signature_service: Arc::new(SignatureService::new(Arc::clone(&stores.signatures))),
            dashboard_service: Arc::new(DashboardService::new(Arc::clone(&stores.documents))),
            document_service,
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}
