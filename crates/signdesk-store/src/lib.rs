//! # signdesk-store
//!
//! Persistence for SignDesk. The repository traits in [`traits`] are the
//! only contract services depend on; the in-memory backend in [`memory`]
//! implements them with per-document locking and a token index.
//!
//! The provider is selected at runtime based on configuration.

#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
pub mod seed;
pub mod traits;

pub use provider::StoreManager;
pub use traits::{
    DocumentMutation, DocumentRepository, SignatureRepository, TemplateRepository, UserRepository,
};
