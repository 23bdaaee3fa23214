//! Standalone signature records.

pub mod model;

pub use model::{CreateSignature, Signature};
