//! Standalone signature records.

pub mod service;

pub use service::{CreateSignatureRequest, SignatureService};
