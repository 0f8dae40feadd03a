//! Announcement repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use labdesk_core::error::{AppError, ErrorKind};
use labdesk_core::result::AppResult;
use labdesk_entity::announcement::{
    Announcement, AnnouncementComment, CreateAnnouncement, CreateAnnouncementComment,
    UpdateAnnouncement,
};

/// Repository for announcements and their comments.
#[derive(Debug, Clone)]
pub struct AnnouncementRepository {
    pool: PgPool,
}

impl AnnouncementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List announcements filtered by archive state, newest first.
    pub async fn find_all(&self, archived: bool) -> AppResult<Vec<Announcement>> {
        sqlx::query_as::<_, Announcement>(
            "SELECT * FROM announcements WHERE archived = $1 ORDER BY created_at DESC",
        )
        .bind(archived)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list announcements", e))
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Announcement>> {
        sqlx::query_as::<_, Announcement>("SELECT * FROM announcements WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find announcement", e)
            })
    }

    pub async fn create(&self, data: &CreateAnnouncement) -> AppResult<Announcement> {
        sqlx::query_as::<_, Announcement>(
            "INSERT INTO announcements (title, content, department, author_name, author_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.department)
        .bind(&data.author_name)
        .bind(data.author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create announcement", e))
    }

    /// Update title and content of an existing announcement.
    pub async fn update(&self, id: Uuid, data: &UpdateAnnouncement) -> AppResult<Announcement> {
        sqlx::query_as::<_, Announcement>(
            "UPDATE announcements SET title = $2, content = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.content)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update announcement", e))?
        .ok_or_else(|| AppError::not_found(format!("Announcement {id} not found")))
    }

    /// Flip the archived flag and return the updated row.
    pub async fn toggle_archived(&self, id: Uuid) -> AppResult<Announcement> {
        sqlx::query_as::<_, Announcement>(
            "UPDATE announcements SET archived = NOT archived, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to toggle announcement archive", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Announcement {id} not found")))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete announcement", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// List comments for one announcement in chronological order.
    pub async fn find_comments(&self, announcement_id: Uuid) -> AppResult<Vec<AnnouncementComment>> {
        sqlx::query_as::<_, AnnouncementComment>(
            "SELECT * FROM announcement_comments \
             WHERE announcement_id = $1 ORDER BY created_at ASC",
        )
        .bind(announcement_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }

    /// List comments for a set of announcements in one query.
    pub async fn find_comments_for(&self, ids: &[Uuid]) -> AppResult<Vec<AnnouncementComment>> {
        sqlx::query_as::<_, AnnouncementComment>(
            "SELECT * FROM announcement_comments \
             WHERE announcement_id = ANY($1) ORDER BY created_at ASC",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }

    pub async fn add_comment(
        &self,
        data: &CreateAnnouncementComment,
    ) -> AppResult<AnnouncementComment> {
        sqlx::query_as::<_, AnnouncementComment>(
            "INSERT INTO announcement_comments \
                 (announcement_id, user_id, author_name, department, content) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.announcement_id)
        .bind(data.user_id)
        .bind(&data.author_name)
        .bind(data.department)
        .bind(&data.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add comment", e))
    }
}
