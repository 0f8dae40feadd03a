//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthResponse>>, ApiError> {
    let db_ok = labdesk_database::connection::health_check(&state.db_pool)
        .await
        .unwrap_or(false);

    Ok(Json(ApiResponse::ok(HealthResponse {
        status: if db_ok { "ok" } else { "degraded" }.to_string(),
        database: if db_ok { "up" } else { "down" }.to_string(),
    })))
}
