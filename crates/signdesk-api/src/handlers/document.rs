//! Document CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};

use signdesk_core::types::DocumentId;
use signdesk_entity::document::Document;

use crate::dto::request::{CreateDocumentRequest, UpdateDocumentRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/documents
pub async fn list_documents(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Document>>>, ApiError> {
    let documents = state.document_service.list().await?;
    Ok(Json(ApiResponse::ok(documents)))
}

/// GET /api/documents/{id}
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Document>>, ApiError> {
    let id: DocumentId = parse_id(&id)?;
    let document = state.document_service.get(id).await?;
    Ok(Json(ApiResponse::ok(document)))
}

/// POST /api/documents
pub async fn create_document(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateDocumentRequest>,
) -> Result<Json<ApiResponse<Document>>, ApiError> {
    let document = state.document_service.create_from_upload(req.into()).await?;
    Ok(Json(ApiResponse::ok(document)))
}

/// PATCH /api/documents/{id}
pub async fn update_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateDocumentRequest>,
) -> Result<Json<ApiResponse<Document>>, ApiError> {
    let id: DocumentId = parse_id(&id)?;
    let document = state.document_service.update(id, req.into()).await?;
    Ok(Json(ApiResponse::ok(document)))
}

/// DELETE /api/documents/{id}
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id: DocumentId = parse_id(&id)?;
    state.document_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Document deleted".to_string(),
    })))
}
