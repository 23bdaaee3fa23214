//! Signature record handlers.

use axum::Json;
use axum::extract::{Path, State};

use signdesk_core::types::{SignatureId, UserId};
use signdesk_entity::signature::Signature;

use crate::dto::request::CreateSignatureRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{ValidatedJson, parse_id};
use crate::state::AppState;

/// POST /api/signatures
pub async fn create_signature(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateSignatureRequest>,
) -> Result<Json<ApiResponse<Signature>>, ApiError> {
    let signature = state.signature_service.create(req.into()).await?;
    Ok(Json(ApiResponse::ok(signature)))
}

/// GET /api/signatures/{id}
pub async fn get_signature(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Signature>>, ApiError> {
    let id: SignatureId = parse_id(&id)?;
    let signature = state.signature_service.get(id).await?;
    Ok(Json(ApiResponse::ok(signature)))
}

/// GET /api/signatures/user/{user_id}
pub async fn list_user_signatures(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Signature>>>, ApiError> {
    let user_id: UserId = parse_id(&user_id)?;
    let signatures = state.signature_service.list_by_user(user_id).await?;
    Ok(Json(ApiResponse::ok(signatures)))
}
