//! Endorsement/ticket repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use labdesk_core::error::{AppError, ErrorKind};
use labdesk_core::result::AppResult;
use labdesk_entity::endorsement::{
    CommentEdit, CreateEndorsement, CreateEndorsementComment, Endorsement, EndorsementComment,
    TicketStatus, UpdateEndorsement,
};

/// Repository for endorsement tickets, their comments, and the
/// append-only comment edit history.
#[derive(Debug, Clone)]
pub struct EndorsementRepository {
    pool: PgPool,
}

impl EndorsementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List tickets, optionally filtered by status, newest first.
    pub async fn find_all(&self, status: Option<TicketStatus>) -> AppResult<Vec<Endorsement>> {
        match status {
            Some(status) => sqlx::query_as::<_, Endorsement>(
                "SELECT * FROM endorsements WHERE status = $1 ORDER BY created_at DESC",
            )
            .bind(status)
            .fetch_all(&self.pool)
            .await,
            None => sqlx::query_as::<_, Endorsement>(
                "SELECT * FROM endorsements ORDER BY created_at DESC",
            )
            .fetch_all(&self.pool)
            .await,
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list endorsements", e))
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Endorsement>> {
        sqlx::query_as::<_, Endorsement>("SELECT * FROM endorsements WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find endorsement", e)
            })
    }

    pub async fn create(&self, data: &CreateEndorsement) -> AppResult<Endorsement> {
        sqlx::query_as::<_, Endorsement>(
            "INSERT INTO endorsements \
                 (title, content, department, priority, requester_id, requester_name) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.department)
        .bind(data.priority)
        .bind(data.requester_id)
        .bind(&data.requester_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create endorsement", e))
    }

    /// Edit a ticket's body, marking it as edited.
    pub async fn update(&self, id: Uuid, data: &UpdateEndorsement) -> AppResult<Endorsement> {
        sqlx::query_as::<_, Endorsement>(
            "UPDATE endorsements \
             SET title = $2, content = $3, priority = $4, edited = TRUE, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.priority)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update endorsement", e))?
        .ok_or_else(|| AppError::not_found(format!("Endorsement {id} not found")))
    }

    /// Close a ticket atomically. Returns `None` when the ticket is
    /// already closed, so the caller can report a conflict.
    pub async fn close(
        &self,
        id: Uuid,
        reason: &str,
        closed_by: Uuid,
        closed_by_name: &str,
    ) -> AppResult<Option<Endorsement>> {
        sqlx::query_as::<_, Endorsement>(
            "UPDATE endorsements \
             SET status = 'closed', close_reason = $2, closed_by = $3, closed_by_name = $4, \
                 closed_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND status <> 'closed' RETURNING *",
        )
        .bind(id)
        .bind(reason)
        .bind(closed_by)
        .bind(closed_by_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to close endorsement", e))
    }

    /// Reopen a closed ticket. Close metadata is kept as an audit trail.
    pub async fn reopen(&self, id: Uuid) -> AppResult<Option<Endorsement>> {
        sqlx::query_as::<_, Endorsement>(
            "UPDATE endorsements SET status = 'open', updated_at = NOW() \
             WHERE id = $1 AND status = 'closed' RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to reopen endorsement", e))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM endorsements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete endorsement", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// List a ticket's comments in chronological order.
    pub async fn find_comments(&self, endorsement_id: Uuid) -> AppResult<Vec<EndorsementComment>> {
        sqlx::query_as::<_, EndorsementComment>(
            "SELECT * FROM endorsement_comments \
             WHERE endorsement_id = $1 ORDER BY created_at ASC",
        )
        .bind(endorsement_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }

    /// List comments for a set of tickets in one query.
    pub async fn find_comments_for(&self, ids: &[Uuid]) -> AppResult<Vec<EndorsementComment>> {
        sqlx::query_as::<_, EndorsementComment>(
            "SELECT * FROM endorsement_comments \
             WHERE endorsement_id = ANY($1) ORDER BY created_at ASC",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }

    pub async fn find_comment_by_id(&self, id: Uuid) -> AppResult<Option<EndorsementComment>> {
        sqlx::query_as::<_, EndorsementComment>(
            "SELECT * FROM endorsement_comments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find comment", e))
    }

    pub async fn add_comment(
        &self,
        data: &CreateEndorsementComment,
    ) -> AppResult<EndorsementComment> {
        sqlx::query_as::<_, EndorsementComment>(
            "INSERT INTO endorsement_comments \
                 (endorsement_id, user_id, username, author_name, department, content) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.endorsement_id)
        .bind(data.user_id)
        .bind(&data.username)
        .bind(&data.author_name)
        .bind(data.department)
        .bind(&data.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add comment", e))
    }

    /// Replace a comment's content, recording the prior content in the
    /// edit history. Both writes happen in one transaction.
    pub async fn edit_comment(
        &self,
        comment_id: Uuid,
        new_content: &str,
    ) -> AppResult<EndorsementComment> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let prior: Option<(String,)> =
            sqlx::query_as("SELECT content FROM endorsement_comments WHERE id = $1 FOR UPDATE")
                .bind(comment_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to load comment", e)
                })?;

        let (prior_content,) = prior
            .ok_or_else(|| AppError::not_found(format!("Comment {comment_id} not found")))?;

        sqlx::query("INSERT INTO comment_edits (comment_id, prior_content) VALUES ($1, $2)")
            .bind(comment_id)
            .bind(&prior_content)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to record comment edit", e)
            })?;

        let updated = sqlx::query_as::<_, EndorsementComment>(
            "UPDATE endorsement_comments \
             SET content = $2, edited = TRUE, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(comment_id)
        .bind(new_content)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update comment", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(updated)
    }

    /// List a comment's edit history, oldest first.
    pub async fn find_comment_edits(&self, comment_id: Uuid) -> AppResult<Vec<CommentEdit>> {
        sqlx::query_as::<_, CommentEdit>(
            "SELECT * FROM comment_edits WHERE comment_id = $1 ORDER BY edited_at ASC",
        )
        .bind(comment_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comment edits", e))
    }
}
