//! Template catalog browsing and instantiation.

pub mod service;

pub use service::{TemplateService, UseTemplateRequest};
