//! Ticket CRUD, the close/reopen lifecycle, and comment editing with
//! history.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use labdesk_auth::policy::guard;
use labdesk_core::error::AppError;
use labdesk_database::repositories::endorsement::EndorsementRepository;
use labdesk_entity::endorsement::{
    CommentEdit, CreateEndorsement, CreateEndorsementComment, Endorsement, EndorsementComment,
    TicketPriority, TicketStatus, UpdateEndorsement,
};
use labdesk_entity::user::Department;

use crate::context::RequestContext;

/// Handles endorsement tickets and their communication trails.
#[derive(Debug, Clone)]
pub struct EndorsementService {
    repo: Arc<EndorsementRepository>,
}

/// Data for filing a new ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTicket {
    /// Subject/title.
    pub title: String,
    /// Rich-text HTML description.
    pub content: String,
    /// Department the ticket belongs to.
    pub department: Department,
    /// Priority; omitted for plain endorsements.
    pub priority: Option<TicketPriority>,
}

impl EndorsementService {
    /// Creates a new endorsement service.
    pub fn new(repo: Arc<EndorsementRepository>) -> Self {
        Self { repo }
    }

    /// Lists tickets, optionally filtered by status, newest first.
    pub async fn list(&self, status: Option<TicketStatus>) -> Result<Vec<Endorsement>, AppError> {
        self.repo.find_all(status).await
    }

    /// Gets a single ticket.
    pub async fn get(&self, id: Uuid) -> Result<Endorsement, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Endorsement {id} not found")))
    }

    /// Lists tickets with their communication trails attached.
    pub async fn list_with_comments(
        &self,
        status: Option<TicketStatus>,
    ) -> Result<Vec<(Endorsement, Vec<EndorsementComment>)>, AppError> {
        let tickets = self.repo.find_all(status).await?;
        let ids: Vec<Uuid> = tickets.iter().map(|t| t.id).collect();

        let mut by_parent: HashMap<Uuid, Vec<EndorsementComment>> = HashMap::new();
        for comment in self.repo.find_comments_for(&ids).await? {
            by_parent
                .entry(comment.endorsement_id)
                .or_default()
                .push(comment);
        }

        Ok(tickets
            .into_iter()
            .map(|t| {
                let comments = by_parent.remove(&t.id).unwrap_or_default();
                (t, comments)
            })
            .collect())
    }

    /// Gets a ticket with its communication trail.
    pub async fn get_with_comments(
        &self,
        id: Uuid,
    ) -> Result<(Endorsement, Vec<EndorsementComment>), AppError> {
        let ticket = self.get(id).await?;
        let comments = self.repo.find_comments(id).await?;
        Ok((ticket, comments))
    }

    /// Files a new ticket requested by the current user.
    pub async fn create(&self, ctx: &RequestContext, data: NewTicket) -> Result<Endorsement, AppError> {
        if data.title.trim().is_empty() {
            return Err(AppError::validation("Title cannot be empty"));
        }
        if data.content.trim().is_empty() {
            return Err(AppError::validation("Content cannot be empty"));
        }

        let ticket = self
            .repo
            .create(&CreateEndorsement {
                title: data.title,
                content: data.content,
                department: data.department,
                priority: data.priority,
                requester_id: ctx.user_id,
                requester_name: ctx.display_name.clone(),
            })
            .await?;

        info!(
            endorsement_id = %ticket.id,
            requester_id = %ctx.user_id,
            "Endorsement created"
        );

        Ok(ticket)
    }

    /// Edits a ticket's body, setting its edited flag.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateEndorsement,
    ) -> Result<Endorsement, AppError> {
        let existing = self.get(id).await?;
        guard::require_edit_record(&ctx.actor(), existing.department, existing.requester_id)?;

        if data.title.trim().is_empty() {
            return Err(AppError::validation("Title cannot be empty"));
        }
        if data.content.trim().is_empty() {
            return Err(AppError::validation("Content cannot be empty"));
        }

        let updated = self.repo.update(id, &data).await?;

        info!(endorsement_id = %id, edited_by = %ctx.user_id, "Endorsement updated");

        Ok(updated)
    }

    /// Closes a ticket with a reason, recording who closed it and when.
    pub async fn close(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        reason: &str,
    ) -> Result<Endorsement, AppError> {
        let existing = self.get(id).await?;
        guard::require_close_ticket(
            &ctx.actor(),
            existing.department,
            existing.requester_id,
            existing.status,
        )?;

        let reason = reason.trim();
        if reason.is_empty() {
            return Err(AppError::validation("A close reason is required"));
        }

        let closed = self
            .repo
            .close(id, reason, ctx.user_id, &ctx.display_name)
            .await?
            .ok_or_else(|| AppError::conflict("Ticket is already closed"))?;

        info!(
            endorsement_id = %id,
            closed_by = %ctx.user_id,
            "Endorsement closed"
        );

        Ok(closed)
    }

    /// Reopens a closed ticket. Close metadata is retained as an audit
    /// trail.
    pub async fn reopen(&self, ctx: &RequestContext, id: Uuid) -> Result<Endorsement, AppError> {
        let existing = self.get(id).await?;
        guard::require_reopen_ticket(&ctx.actor(), existing.department, existing.status)?;

        let reopened = self
            .repo
            .reopen(id)
            .await?
            .ok_or_else(|| AppError::conflict("Ticket is not closed"))?;

        info!(
            endorsement_id = %id,
            reopened_by = %ctx.user_id,
            "Endorsement reopened"
        );

        Ok(reopened)
    }

    /// Deletes a ticket and its communication trail.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let existing = self.get(id).await?;
        guard::require_delete_ticket(&ctx.actor(), existing.department)?;

        self.repo.delete(id).await?;

        info!(endorsement_id = %id, deleted_by = %ctx.user_id, "Endorsement deleted");

        Ok(())
    }

    /// Lists a ticket's comments in posting order.
    pub async fn list_comments(&self, id: Uuid) -> Result<Vec<EndorsementComment>, AppError> {
        self.get(id).await?;
        self.repo.find_comments(id).await
    }

    /// Appends a comment to an open ticket.
    pub async fn add_comment(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        content: String,
    ) -> Result<EndorsementComment, AppError> {
        let ticket = self.get(id).await?;
        guard::require_comment_on_ticket(ticket.status)?;

        if content.trim().is_empty() {
            return Err(AppError::validation("Comment cannot be empty"));
        }

        let comment = self
            .repo
            .add_comment(&CreateEndorsementComment {
                endorsement_id: id,
                user_id: ctx.user_id,
                username: ctx.username.clone(),
                author_name: ctx.display_name.clone(),
                department: ctx.department,
                content,
            })
            .await?;

        info!(
            endorsement_id = %id,
            comment_id = %comment.id,
            user_id = %ctx.user_id,
            "Comment posted on endorsement"
        );

        Ok(comment)
    }

    /// Edits a comment, pushing the prior content onto its history.
    ///
    /// Only the original commenter may edit, and only while the ticket
    /// is open.
    pub async fn edit_comment(
        &self,
        ctx: &RequestContext,
        ticket_id: Uuid,
        comment_id: Uuid,
        content: String,
    ) -> Result<EndorsementComment, AppError> {
        let ticket = self.get(ticket_id).await?;
        let comment = self.get_comment(ticket_id, comment_id).await?;

        guard::require_edit_comment(
            &ctx.actor(),
            ticket.status,
            comment.user_id,
            &comment.username,
        )?;

        if content.trim().is_empty() {
            return Err(AppError::validation("Comment cannot be empty"));
        }

        let updated = self.repo.edit_comment(comment_id, &content).await?;

        info!(
            endorsement_id = %ticket_id,
            comment_id = %comment_id,
            edited_by = %ctx.user_id,
            "Endorsement comment edited"
        );

        Ok(updated)
    }

    /// Lists a comment's edit history, oldest first. Admin-only.
    pub async fn comment_history(
        &self,
        ctx: &RequestContext,
        ticket_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Vec<CommentEdit>, AppError> {
        guard::require_view_edit_history(&ctx.actor())?;

        self.get_comment(ticket_id, comment_id).await?;
        self.repo.find_comment_edits(comment_id).await
    }

    async fn get_comment(
        &self,
        ticket_id: Uuid,
        comment_id: Uuid,
    ) -> Result<EndorsementComment, AppError> {
        let comment = self
            .repo
            .find_comment_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Comment {comment_id} not found")))?;

        if comment.endorsement_id != ticket_id {
            return Err(AppError::not_found(format!(
                "Comment {comment_id} not found on this ticket"
            )));
        }

        Ok(comment)
    }
}
