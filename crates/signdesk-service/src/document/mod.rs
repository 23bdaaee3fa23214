//! Document lifecycle: creation, editing, signing links, and signing.

pub mod link;
pub mod service;
pub mod signing;
pub mod upload;

pub use link::LinkService;
pub use service::{CreateDocumentRequest, DocumentService};
pub use signing::{SigningLink, SigningService};
pub use upload::{UploadParams, UploadService};
