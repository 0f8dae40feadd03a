//! Endorsement comment and comment edit history models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::Department;

/// A comment in a ticket's communication trail.
///
/// Editable by its author while the ticket is open; locked once the
/// ticket is closed. Every edit records the prior content in an
/// append-only history.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EndorsementComment {
    /// Unique identifier.
    pub id: Uuid,
    /// The ticket this comment belongs to.
    pub endorsement_id: Uuid,
    /// Identifier of the commenter.
    pub user_id: Uuid,
    /// Login name of the commenter.
    pub username: String,
    /// Display name of the commenter at posting time.
    pub author_name: String,
    /// Department of the commenter.
    pub department: Department,
    /// Current comment text (always the latest edit).
    pub content: String,
    /// Whether the comment has ever been edited.
    pub edited: bool,
    /// Server-assigned posting timestamp.
    pub created_at: DateTime<Utc>,
    /// When the comment was last edited.
    pub updated_at: DateTime<Utc>,
}

/// Data required to post a comment on a ticket.
#[derive(Debug, Clone)]
pub struct CreateEndorsementComment {
    pub endorsement_id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub author_name: String,
    pub department: Department,
    pub content: String,
}

/// One entry in a comment's append-only edit history.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommentEdit {
    /// Unique identifier.
    pub id: Uuid,
    /// The comment this entry belongs to.
    pub comment_id: Uuid,
    /// The content the comment had before the edit.
    pub prior_content: String,
    /// When the edit happened.
    pub edited_at: DateTime<Utc>,
}
