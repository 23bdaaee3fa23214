//! In-memory store backend.

pub mod document;
pub mod signature;
pub mod template;
pub mod user;

pub use document::MemoryDocumentStore;
pub use signature::MemorySignatureStore;
pub use template::MemoryTemplateStore;
pub use user::MemoryUserStore;
