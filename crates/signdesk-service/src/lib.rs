//! # signdesk-service
//!
//! Business logic service layer for SignDesk. Each service orchestrates the
//! repositories in `signdesk-store` to implement one application use case:
//! document lifecycle, signing links, template instantiation, dashboard
//! counts, and signature records.
//!
//! Services follow constructor injection. All dependencies are provided at
//! construction time via `Arc` references, and every operation returns an
//! owned snapshot of the stored record.

pub mod dashboard;
pub mod document;
pub mod signature;
pub mod template;

pub use dashboard::{DashboardService, DashboardStats};
pub use document::{
    CreateDocumentRequest, DocumentService, LinkService, SigningLink, SigningService,
    UploadParams, UploadService,
};
pub use signature::{CreateSignatureRequest, SignatureService};
pub use template::{TemplateService, UseTemplateRequest};
