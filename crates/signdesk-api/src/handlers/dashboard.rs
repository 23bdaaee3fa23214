//! Dashboard handlers.

use axum::Json;
use axum::extract::State;

use signdesk_service::DashboardStats;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/dashboard/stats
pub async fn stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardStats>>, ApiError> {
    let stats = state.dashboard_service.stats().await?;
    Ok(Json(ApiResponse::ok(stats)))
}
