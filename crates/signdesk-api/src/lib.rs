//! # signdesk-api
//!
//! HTTP API layer for SignDesk built on Axum.
//!
//! Provides the REST endpoints for documents, signing links, templates,
//! signature records, and the dashboard, together with middleware (CORS,
//! compression, request logging), extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
