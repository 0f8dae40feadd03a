//! Endorsement ticket handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use labdesk_core::error::AppError;
use labdesk_entity::endorsement::{CommentEdit, EndorsementComment, UpdateEndorsement};
use labdesk_service::endorsement::service::NewTicket;

use crate::dto::request::{
    CloseTicketRequest, CommentRequest, CreateEndorsementRequest, StatusQuery,
    UpdateEndorsementRequest,
};
use crate::dto::response::{ApiResponse, EndorsementResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/endorsements?status={status}
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<StatusQuery>,
) -> Result<Json<ApiResponse<Vec<EndorsementResponse>>>, ApiError> {
    let rows = state
        .endorsement_service
        .list_with_comments(query.status)
        .await?;

    Ok(Json(ApiResponse::ok(
        rows.into_iter()
            .map(|(t, comments)| EndorsementResponse::from_parts(t, comments))
            .collect(),
    )))
}

/// GET /api/endorsements/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EndorsementResponse>>, ApiError> {
    let (ticket, comments) = state.endorsement_service.get_with_comments(id).await?;
    Ok(Json(ApiResponse::ok(EndorsementResponse::from_parts(
        ticket, comments,
    ))))
}

/// POST /api/endorsements
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateEndorsementRequest>,
) -> Result<Json<ApiResponse<EndorsementResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let ticket = state
        .endorsement_service
        .create(
            &auth,
            NewTicket {
                title: req.title,
                content: req.content,
                department: req.department,
                priority: req.priority,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(EndorsementResponse::from_parts(
        ticket,
        Vec::new(),
    ))))
}

/// PUT /api/endorsements/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEndorsementRequest>,
) -> Result<Json<ApiResponse<EndorsementResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let ticket = state
        .endorsement_service
        .update(
            &auth,
            id,
            UpdateEndorsement {
                title: req.title,
                content: req.content,
                priority: req.priority,
            },
        )
        .await?;

    let comments = state.endorsement_service.list_comments(id).await?;

    Ok(Json(ApiResponse::ok(EndorsementResponse::from_parts(
        ticket, comments,
    ))))
}

/// PUT /api/endorsements/{id}/close
pub async fn close(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CloseTicketRequest>,
) -> Result<Json<ApiResponse<EndorsementResponse>>, ApiError> {
    let ticket = state.endorsement_service.close(&auth, id, &req.reason).await?;
    let comments = state.endorsement_service.list_comments(id).await?;

    Ok(Json(ApiResponse::ok(EndorsementResponse::from_parts(
        ticket, comments,
    ))))
}

/// PUT /api/endorsements/{id}/reopen
pub async fn reopen(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EndorsementResponse>>, ApiError> {
    let ticket = state.endorsement_service.reopen(&auth, id).await?;
    let comments = state.endorsement_service.list_comments(id).await?;

    Ok(Json(ApiResponse::ok(EndorsementResponse::from_parts(
        ticket, comments,
    ))))
}

/// DELETE /api/endorsements/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.endorsement_service.delete(&auth, id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Endorsement deleted".to_string(),
    })))
}

/// GET /api/endorsements/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<EndorsementComment>>>, ApiError> {
    let comments = state.endorsement_service.list_comments(id).await?;
    Ok(Json(ApiResponse::ok(comments)))
}

/// POST /api/endorsements/{id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<ApiResponse<EndorsementComment>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let comment = state
        .endorsement_service
        .add_comment(&auth, id, req.content)
        .await?;

    Ok(Json(ApiResponse::ok(comment)))
}

/// PUT /api/endorsements/{id}/comments/{comment_id}
pub async fn edit_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, comment_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<ApiResponse<EndorsementComment>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let comment = state
        .endorsement_service
        .edit_comment(&auth, id, comment_id, req.content)
        .await?;

    Ok(Json(ApiResponse::ok(comment)))
}

/// GET /api/endorsements/{id}/comments/{comment_id}/history
pub async fn comment_history(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, comment_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<Vec<CommentEdit>>>, ApiError> {
    let history = state
        .endorsement_service
        .comment_history(&auth, id, comment_id)
        .await?;

    Ok(Json(ApiResponse::ok(history)))
}
