//! Request handlers grouped by resource.

pub mod dashboard;
pub mod document;
pub mod health;
pub mod signature;
pub mod signing;
pub mod template;
pub mod upload;
