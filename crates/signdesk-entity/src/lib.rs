//! # signdesk-entity
//!
//! Domain entity models for SignDesk. Every struct in this crate is either a
//! stored record or a domain value object. All entities derive `Debug`,
//! `Clone`, `Serialize`, and `Deserialize`, and serialize with camelCase
//! field names to match the signing front end.

pub mod document;
pub mod signature;
pub mod template;
pub mod user;
