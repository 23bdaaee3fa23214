//! Signing link handlers. The token routes are the client-facing surface.

use axum::Json;
use axum::extract::{Path, State};

use signdesk_core::types::DocumentId;
use signdesk_entity::document::Document;
use signdesk_service::SigningLink;

use crate::dto::request::{GenerateLinkRequest, SignDocumentRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{ApiJson, ValidatedJson, parse_id};
use crate::state::AppState;

/// POST /api/documents/{id}/generate-link
pub async fn generate_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<GenerateLinkRequest>,
) -> Result<Json<ApiResponse<SigningLink>>, ApiError> {
    let id: DocumentId = parse_id(&id)?;
    let link = state
        .signing_service
        .generate_link(id, &req.client_email)
        .await?;
    Ok(Json(ApiResponse::ok(link)))
}

/// GET /api/documents/sign/{token}
pub async fn get_by_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<ApiResponse<Document>>, ApiError> {
    let document = state.signing_service.resolve(&token).await?;
    Ok(Json(ApiResponse::ok(document)))
}

/// POST /api/documents/sign/{token}
pub async fn sign_document(
    State(state): State<AppState>,
    Path(token): Path<String>,
    ApiJson(req): ApiJson<SignDocumentRequest>,
) -> Result<Json<ApiResponse<Document>>, ApiError> {
    let document = state
        .signing_service
        .sign(&token, req.signature_data)
        .await?;
    Ok(Json(ApiResponse::ok(document)))
}
