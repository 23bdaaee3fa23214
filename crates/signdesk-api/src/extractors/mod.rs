//! Custom Axum extractors.

pub mod json;
pub mod path;

pub use json::{ApiJson, ValidatedJson};
pub use path::parse_id;
