//! Announcement handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use labdesk_core::error::AppError;
use labdesk_entity::announcement::{AnnouncementComment, UpdateAnnouncement};
use labdesk_service::announcement::service::NewAnnouncement;

use crate::dto::request::{
    ArchivedQuery, CommentRequest, CreateAnnouncementRequest, UpdateAnnouncementRequest,
};
use crate::dto::response::{AnnouncementResponse, ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/announcements?archived={bool}
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ArchivedQuery>,
) -> Result<Json<ApiResponse<Vec<AnnouncementResponse>>>, ApiError> {
    let rows = state
        .announcement_service
        .list_with_comments(query.archived)
        .await?;

    Ok(Json(ApiResponse::ok(
        rows.into_iter()
            .map(|(a, comments)| AnnouncementResponse::from_parts(a, comments))
            .collect(),
    )))
}

/// GET /api/announcements/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AnnouncementResponse>>, ApiError> {
    let (announcement, comments) = state.announcement_service.get_with_comments(id).await?;
    Ok(Json(ApiResponse::ok(AnnouncementResponse::from_parts(
        announcement,
        comments,
    ))))
}

/// POST /api/announcements
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateAnnouncementRequest>,
) -> Result<Json<ApiResponse<AnnouncementResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let announcement = state
        .announcement_service
        .create(
            &auth,
            NewAnnouncement {
                title: req.title,
                content: req.content,
                department: req.department,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(AnnouncementResponse::from_parts(
        announcement,
        Vec::new(),
    ))))
}

/// PUT /api/announcements/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAnnouncementRequest>,
) -> Result<Json<ApiResponse<AnnouncementResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let announcement = state
        .announcement_service
        .update(
            &auth,
            id,
            UpdateAnnouncement {
                title: req.title,
                content: req.content,
            },
        )
        .await?;

    let comments = state.announcement_service.list_comments(id).await?;

    Ok(Json(ApiResponse::ok(AnnouncementResponse::from_parts(
        announcement,
        comments,
    ))))
}

/// PUT /api/announcements/{id}/archive
pub async fn toggle_archive(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AnnouncementResponse>>, ApiError> {
    let announcement = state.announcement_service.toggle_archive(&auth, id).await?;
    let comments = state.announcement_service.list_comments(id).await?;

    Ok(Json(ApiResponse::ok(AnnouncementResponse::from_parts(
        announcement,
        comments,
    ))))
}

/// DELETE /api/announcements/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.announcement_service.delete(&auth, id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Announcement deleted".to_string(),
    })))
}

/// GET /api/announcements/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<AnnouncementComment>>>, ApiError> {
    let comments = state.announcement_service.list_comments(id).await?;
    Ok(Json(ApiResponse::ok(comments)))
}

/// POST /api/announcements/{id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<ApiResponse<AnnouncementComment>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let comment = state
        .announcement_service
        .add_comment(&auth, id, req.content)
        .await?;

    Ok(Json(ApiResponse::ok(comment)))
}
