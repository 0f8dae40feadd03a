//! Endorsement/ticket entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::Department;

use super::priority::TicketPriority;
use super::status::TicketStatus;

/// An endorsement record, used as a helpdesk ticket when it carries a
/// lifecycle.
///
/// Close metadata (`close_reason`, `closed_by`, `closed_by_name`,
/// `closed_at`) is populated atomically with the transition to
/// [`TicketStatus::Closed`] and retained across a reopen as an audit
/// trail.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Endorsement {
    /// Unique identifier.
    pub id: Uuid,
    /// Subject/title.
    pub title: String,
    /// Rich-text HTML description.
    pub content: String,
    /// Department the ticket belongs to.
    pub department: Department,
    /// Priority; `None` for plain endorsements.
    pub priority: Option<TicketPriority>,
    /// Identifier of the requester.
    pub requester_id: Uuid,
    /// Display name of the requester at creation time.
    pub requester_name: String,
    /// Current lifecycle status.
    pub status: TicketStatus,
    /// Reason given when the ticket was last closed.
    pub close_reason: Option<String>,
    /// Identifier of the user who last closed the ticket.
    pub closed_by: Option<Uuid>,
    /// Display name of the user who last closed the ticket.
    pub closed_by_name: Option<String>,
    /// When the ticket was last closed.
    pub closed_at: Option<DateTime<Utc>>,
    /// Whether the ticket body has been edited since creation.
    pub edited: bool,
    /// When the ticket was created.
    pub created_at: DateTime<Utc>,
    /// When the ticket was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Endorsement {
    /// Whether the ticket is closed and its communication trail locked.
    pub fn is_closed(&self) -> bool {
        self.status.is_closed()
    }
}

/// Data required to create an endorsement ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEndorsement {
    /// Subject/title.
    pub title: String,
    /// Rich-text HTML description.
    pub content: String,
    /// Department.
    pub department: Department,
    /// Priority; omitted for plain endorsements.
    pub priority: Option<TicketPriority>,
    /// Requester identifier.
    pub requester_id: Uuid,
    /// Requester display name.
    pub requester_name: String,
}

/// Data for editing a ticket's body. Sets the `edited` flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEndorsement {
    /// New title.
    pub title: String,
    /// New content.
    pub content: String,
    /// New priority (replaces the existing value, including clearing it).
    pub priority: Option<TicketPriority>,
}
