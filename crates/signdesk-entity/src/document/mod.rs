//! Document domain entities.

pub mod model;
pub mod patch;
pub mod status;

pub use model::{CreateDocument, Document};
pub use patch::DocumentPatch;
pub use status::DocumentStatus;
