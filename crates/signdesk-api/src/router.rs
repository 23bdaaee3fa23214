//! Route definitions for the SignDesk HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    http::StatusCode,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Headroom for multipart framing on top of the file size limit.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.upload.max_file_size_bytes as usize + MULTIPART_OVERHEAD_BYTES;
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    let api_routes = Router::new()
        .merge(document_routes())
        .merge(signing_routes())
        .merge(template_routes())
        .merge(signature_routes())
        .merge(dashboard_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(middleware::compression::build_compression_layer())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::debug_span!(
                "request",
                method = %request.method(),
                path = %middleware::logging::redact_path(request.uri().path()),
            )
        }))
        .layer(middleware::cors::build_cors_layer(&state.config.server.cors))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Document CRUD and upload
fn document_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/documents",
            get(handlers::document::list_documents).post(handlers::document::create_document),
        )
        .route("/documents/upload", post(handlers::upload::upload_document))
        .route(
            "/documents/{id}",
            get(handlers::document::get_document)
                .patch(handlers::document::update_document)
                .delete(handlers::document::delete_document),
        )
}

/// Signing link issuance and the client-facing token routes
fn signing_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/documents/{id}/generate-link",
            post(handlers::signing::generate_link),
        )
        .route(
            "/documents/sign/{token}",
            get(handlers::signing::get_by_token).post(handlers::signing::sign_document),
        )
}

/// Template catalog
fn template_routes() -> Router<AppState> {
    Router::new()
        .route("/templates", get(handlers::template::list_templates))
        .route("/templates/{id}", get(handlers::template::get_template))
        .route("/templates/{id}/use", post(handlers::template::use_template))
}

/// Signature records
fn signature_routes() -> Router<AppState> {
    Router::new()
        .route("/signatures", post(handlers::signature::create_signature))
        .route("/signatures/{id}", get(handlers::signature::get_signature))
        .route(
            "/signatures/user/{user_id}",
            get(handlers::signature::list_user_signatures),
        )
}

/// Dashboard statistics
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard/stats", get(handlers::dashboard::stats))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
