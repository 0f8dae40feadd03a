//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use labdesk_entity::announcement::{Announcement, AnnouncementComment};
use labdesk_entity::endorsement::{Endorsement, EndorsementComment, TicketPriority, TicketStatus};
use labdesk_entity::user::{Department, User, UserRole};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Count response (bulk operations).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Number of records affected.
    pub count: u64,
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

/// User summary for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Display name.
    pub display_name: String,
    /// Role.
    pub role: UserRole,
    /// Department.
    pub department: Department,
    /// Whether the account is active.
    pub active: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let display_name = user.display_name();
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            display_name,
            role: user.role,
            department: user.department,
            active: user.active,
            created_at: user.created_at,
        }
    }
}

/// Announcement with its comment thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementResponse {
    /// Announcement ID.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Rich-text HTML body.
    pub content: String,
    /// Department.
    pub department: Department,
    /// Author display name.
    pub author_name: String,
    /// Author ID.
    pub author_id: Uuid,
    /// Archived flag.
    pub archived: bool,
    /// Comment thread in posting order.
    pub comments: Vec<AnnouncementComment>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl AnnouncementResponse {
    /// Builds a response from an announcement and its comments.
    pub fn from_parts(announcement: Announcement, comments: Vec<AnnouncementComment>) -> Self {
        Self {
            id: announcement.id,
            title: announcement.title,
            content: announcement.content,
            department: announcement.department,
            author_name: announcement.author_name,
            author_id: announcement.author_id,
            archived: announcement.archived,
            comments,
            created_at: announcement.created_at,
            updated_at: announcement.updated_at,
        }
    }
}

/// Endorsement ticket with its communication trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndorsementResponse {
    /// Ticket ID.
    pub id: Uuid,
    /// Subject/title.
    pub title: String,
    /// Rich-text HTML description.
    pub content: String,
    /// Department.
    pub department: Department,
    /// Priority; absent for plain endorsements.
    pub priority: Option<TicketPriority>,
    /// Requester ID.
    pub requester_id: Uuid,
    /// Requester display name.
    pub requester_name: String,
    /// Lifecycle status.
    pub status: TicketStatus,
    /// Reason given at the last close.
    pub close_reason: Option<String>,
    /// Who last closed the ticket.
    pub closed_by: Option<Uuid>,
    /// Display name of who last closed the ticket.
    pub closed_by_name: Option<String>,
    /// When the ticket was last closed.
    pub closed_at: Option<DateTime<Utc>>,
    /// Whether the body has been edited.
    pub edited: bool,
    /// Communication trail in posting order.
    pub comments: Vec<EndorsementComment>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl EndorsementResponse {
    /// Builds a response from a ticket and its comments.
    pub fn from_parts(ticket: Endorsement, comments: Vec<EndorsementComment>) -> Self {
        Self {
            id: ticket.id,
            title: ticket.title,
            content: ticket.content,
            department: ticket.department,
            priority: ticket.priority,
            requester_id: ticket.requester_id,
            requester_name: ticket.requester_name,
            status: ticket.status,
            close_reason: ticket.close_reason,
            closed_by: ticket.closed_by,
            closed_by_name: ticket.closed_by_name,
            closed_at: ticket.closed_at,
            edited: ticket.edited,
            comments,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Database connectivity.
    pub database: String,
}
