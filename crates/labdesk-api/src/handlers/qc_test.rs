//! QC test board handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use labdesk_core::error::AppError;
use labdesk_entity::qc::{QcTest, UpsertQcTest};

use crate::dto::request::UpsertQcTestRequest;
use crate::dto::response::{ApiResponse, CountResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/qctests
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<QcTest>>>, ApiError> {
    let tests = state.qc_service.list().await?;
    Ok(Json(ApiResponse::ok(tests)))
}

/// POST /api/qctests (upsert by id or by matching name)
pub async fn upsert(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpsertQcTestRequest>,
) -> Result<Json<ApiResponse<QcTest>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let test = state
        .qc_service
        .upsert(
            &auth,
            UpsertQcTest {
                id: req.id,
                name: req.name,
                status: req.status,
                remaining: req.remaining,
                section: req.section,
                remarks: req.remarks,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(test)))
}

/// DELETE /api/qctests/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.qc_service.delete(&auth, id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "QC test deleted".to_string(),
    })))
}

/// POST /api/qctests/reset
pub async fn reset_all(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state.qc_service.reset_all(&auth).await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}
