//! Announcement CRUD, archiving, and comments.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use labdesk_auth::policy::guard;
use labdesk_core::error::AppError;
use labdesk_database::repositories::announcement::AnnouncementRepository;
use labdesk_entity::announcement::{
    Announcement, AnnouncementComment, CreateAnnouncement, CreateAnnouncementComment,
    UpdateAnnouncement,
};
use labdesk_entity::user::Department;

use crate::context::RequestContext;

/// Handles announcement board operations.
#[derive(Debug, Clone)]
pub struct AnnouncementService {
    repo: Arc<AnnouncementRepository>,
}

/// Data for posting a new announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAnnouncement {
    /// Title.
    pub title: String,
    /// Rich-text HTML body.
    pub content: String,
    /// Department the announcement belongs to.
    pub department: Department,
}

impl AnnouncementService {
    /// Creates a new announcement service.
    pub fn new(repo: Arc<AnnouncementRepository>) -> Self {
        Self { repo }
    }

    /// Lists announcements by archive state, newest first.
    pub async fn list(&self, archived: bool) -> Result<Vec<Announcement>, AppError> {
        self.repo.find_all(archived).await
    }

    /// Gets a single announcement.
    pub async fn get(&self, id: Uuid) -> Result<Announcement, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Announcement {id} not found")))
    }

    /// Lists announcements with their comment threads attached.
    pub async fn list_with_comments(
        &self,
        archived: bool,
    ) -> Result<Vec<(Announcement, Vec<AnnouncementComment>)>, AppError> {
        let announcements = self.repo.find_all(archived).await?;
        let ids: Vec<Uuid> = announcements.iter().map(|a| a.id).collect();

        let mut by_parent: HashMap<Uuid, Vec<AnnouncementComment>> = HashMap::new();
        for comment in self.repo.find_comments_for(&ids).await? {
            by_parent
                .entry(comment.announcement_id)
                .or_default()
                .push(comment);
        }

        Ok(announcements
            .into_iter()
            .map(|a| {
                let comments = by_parent.remove(&a.id).unwrap_or_default();
                (a, comments)
            })
            .collect())
    }

    /// Gets an announcement with its comment thread.
    pub async fn get_with_comments(
        &self,
        id: Uuid,
    ) -> Result<(Announcement, Vec<AnnouncementComment>), AppError> {
        let announcement = self.get(id).await?;
        let comments = self.repo.find_comments(id).await?;
        Ok((announcement, comments))
    }

    /// Posts a new announcement authored by the current user.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: NewAnnouncement,
    ) -> Result<Announcement, AppError> {
        if data.title.trim().is_empty() {
            return Err(AppError::validation("Title cannot be empty"));
        }
        if data.content.trim().is_empty() {
            return Err(AppError::validation("Content cannot be empty"));
        }

        let announcement = self
            .repo
            .create(&CreateAnnouncement {
                title: data.title,
                content: data.content,
                department: data.department,
                author_name: ctx.display_name.clone(),
                author_id: ctx.user_id,
            })
            .await?;

        info!(
            announcement_id = %announcement.id,
            author_id = %ctx.user_id,
            "Announcement created"
        );

        Ok(announcement)
    }

    /// Edits an announcement's title and content.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateAnnouncement,
    ) -> Result<Announcement, AppError> {
        let existing = self.get(id).await?;
        guard::require_edit_record(&ctx.actor(), existing.department, existing.author_id)?;

        if data.title.trim().is_empty() {
            return Err(AppError::validation("Title cannot be empty"));
        }
        if data.content.trim().is_empty() {
            return Err(AppError::validation("Content cannot be empty"));
        }

        let updated = self.repo.update(id, &data).await?;

        info!(announcement_id = %id, edited_by = %ctx.user_id, "Announcement updated");

        Ok(updated)
    }

    /// Toggles the archived flag.
    pub async fn toggle_archive(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> Result<Announcement, AppError> {
        let existing = self.get(id).await?;
        guard::require_archive(&ctx.actor(), existing.department)?;

        let updated = self.repo.toggle_archived(id).await?;

        info!(
            announcement_id = %id,
            archived = updated.archived,
            toggled_by = %ctx.user_id,
            "Announcement archive toggled"
        );

        Ok(updated)
    }

    /// Deletes an announcement and its comments.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        guard::require_delete_announcement(&ctx.actor())?;

        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Announcement {id} not found")));
        }

        info!(announcement_id = %id, deleted_by = %ctx.user_id, "Announcement deleted");

        Ok(())
    }

    /// Lists an announcement's comments in posting order.
    pub async fn list_comments(&self, id: Uuid) -> Result<Vec<AnnouncementComment>, AppError> {
        self.get(id).await?;
        self.repo.find_comments(id).await
    }

    /// Appends a comment. Announcement comments are immutable once
    /// posted.
    pub async fn add_comment(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        content: String,
    ) -> Result<AnnouncementComment, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::validation("Comment cannot be empty"));
        }

        self.get(id).await?;

        let comment = self
            .repo
            .add_comment(&CreateAnnouncementComment {
                announcement_id: id,
                user_id: ctx.user_id,
                author_name: ctx.display_name.clone(),
                department: ctx.department,
                content,
            })
            .await?;

        info!(
            announcement_id = %id,
            comment_id = %comment.id,
            user_id = %ctx.user_id,
            "Comment posted on announcement"
        );

        Ok(comment)
    }
}
