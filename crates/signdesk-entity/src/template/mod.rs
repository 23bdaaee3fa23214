//! Template domain entities.

pub mod category;
pub mod model;

pub use category::TemplateCategory;
pub use model::{CreateTemplate, Template};
