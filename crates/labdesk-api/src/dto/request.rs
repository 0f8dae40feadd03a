//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use labdesk_entity::endorsement::{TicketPriority, TicketStatus};
use labdesk_entity::qc::{LabSection, QcStatus};
use labdesk_entity::user::{Department, UserRole};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    /// Username.
    #[validate(length(min = 3, max = 100))]
    pub username: String,
    /// Password.
    #[validate(length(min = 8))]
    pub password: String,
    /// First name.
    #[validate(length(min = 1))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 1))]
    pub last_name: String,
    /// Role.
    pub role: UserRole,
    /// Department.
    pub department: Department,
}

/// Update user request (admin). Omitted fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New role.
    pub role: Option<UserRole>,
    /// New department.
    pub department: Option<Department>,
    /// New active flag.
    pub active: Option<bool>,
    /// New password (admin reset).
    pub password: Option<String>,
}

/// Create announcement request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAnnouncementRequest {
    /// Title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Rich-text HTML body.
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    /// Department.
    pub department: Department,
}

/// Update announcement request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateAnnouncementRequest {
    /// New title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// New content.
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

/// Comment posting or editing request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentRequest {
    /// Comment text.
    #[validate(length(min = 1, message = "Comment is required"))]
    pub content: String,
}

/// Create endorsement request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEndorsementRequest {
    /// Subject/title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Rich-text HTML description.
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    /// Department.
    pub department: Department,
    /// Priority; omitted for plain endorsements.
    pub priority: Option<TicketPriority>,
}

/// Update endorsement request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateEndorsementRequest {
    /// New title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// New content.
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    /// New priority.
    pub priority: Option<TicketPriority>,
}

/// Close ticket request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CloseTicketRequest {
    /// Reason for closing.
    #[validate(length(min = 1, message = "A close reason is required"))]
    pub reason: String,
}

/// QC test upsert request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpsertQcTestRequest {
    /// Explicit record ID for an in-place update.
    pub id: Option<Uuid>,
    /// Test name; the case-insensitive upsert key.
    #[validate(length(min = 1, message = "Test name is required"))]
    pub name: String,
    /// QC status.
    pub status: QcStatus,
    /// Remaining test count.
    pub remaining: Option<i32>,
    /// Laboratory section.
    pub section: Option<LabSection>,
    /// Free-text remarks.
    #[serde(default)]
    pub remarks: String,
}

/// Archived filter on announcement listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchivedQuery {
    /// Archive state to list; defaults to false.
    #[serde(default)]
    pub archived: bool,
}

/// Status filter on endorsement listing.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusQuery {
    /// Optional status to filter by.
    pub status: Option<TicketStatus>,
}
