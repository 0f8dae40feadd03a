//! Announcement entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::Department;

/// A departmental announcement.
///
/// Announcements carry rich-text HTML content, belong to a department
/// fixed at creation, and can be archived and unarchived without losing
/// content or comments.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Announcement {
    /// Unique identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Rich-text HTML content.
    pub content: String,
    /// Department the announcement belongs to.
    pub department: Department,
    /// Display name of the author at posting time.
    pub author_name: String,
    /// Identifier of the author.
    pub author_id: Uuid,
    /// Whether the announcement is archived.
    pub archived: bool,
    /// When the announcement was posted.
    pub created_at: DateTime<Utc>,
    /// When the announcement was last edited.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create an announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnnouncement {
    /// Title.
    pub title: String,
    /// Rich-text HTML content.
    pub content: String,
    /// Department.
    pub department: Department,
    /// Author display name.
    pub author_name: String,
    /// Author identifier.
    pub author_id: Uuid,
}

/// Data for editing an announcement. Department and author are fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAnnouncement {
    /// New title.
    pub title: String,
    /// New content.
    pub content: String,
}
