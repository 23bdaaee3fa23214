//! Template catalog handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use signdesk_core::types::TemplateId;
use signdesk_entity::document::Document;
use signdesk_entity::template::Template;

use crate::dto::request::{TemplateQuery, UseTemplateRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{ApiJson, parse_id};
use crate::state::AppState;

/// GET /api/templates?category=
pub async fn list_templates(
    State(state): State<AppState>,
    Query(query): Query<TemplateQuery>,
) -> Result<Json<ApiResponse<Vec<Template>>>, ApiError> {
    let templates = state
        .template_service
        .list(query.category.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(templates)))
}

/// GET /api/templates/{id}
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Template>>, ApiError> {
    let id: TemplateId = parse_id(&id)?;
    let template = state.template_service.get(id).await?;
    Ok(Json(ApiResponse::ok(template)))
}

/// POST /api/templates/{id}/use
pub async fn use_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UseTemplateRequest>,
) -> Result<Json<ApiResponse<Document>>, ApiError> {
    let id: TemplateId = parse_id(&id)?;
    let document = state.template_service.use_template(id, req.into()).await?;
    Ok(Json(ApiResponse::ok(document)))
}
