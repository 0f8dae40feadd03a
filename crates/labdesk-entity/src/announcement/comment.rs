//! Announcement comment model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::Department;

/// A comment on an announcement.
///
/// Announcement comments are append-only: once posted there is no edit
/// or delete operation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnnouncementComment {
    /// Unique identifier.
    pub id: Uuid,
    /// The announcement this comment belongs to.
    pub announcement_id: Uuid,
    /// Identifier of the commenter.
    pub user_id: Uuid,
    /// Display name of the commenter at posting time.
    pub author_name: String,
    /// Department of the commenter.
    pub department: Department,
    /// Comment text.
    pub content: String,
    /// Server-assigned posting timestamp.
    pub created_at: DateTime<Utc>,
}

/// Data required to post a comment on an announcement.
#[derive(Debug, Clone)]
pub struct CreateAnnouncementComment {
    pub announcement_id: Uuid,
    pub user_id: Uuid,
    pub author_name: String,
    pub department: Department,
    pub content: String,
}
