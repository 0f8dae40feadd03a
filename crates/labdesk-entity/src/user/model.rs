//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::department::Department;
use super::role::UserRole;

/// A registered user of the intranet.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// User role.
    pub role: UserRole,
    /// Department the user belongs to.
    pub department: Department,
    /// Whether the account is active (inactive users cannot log in).
    pub active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The user's display name, as shown on posts and comments.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check if this user can currently log in.
    pub fn can_login(&self) -> bool {
        self.active
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Assigned role.
    pub role: UserRole,
    /// Assigned department.
    pub department: Department,
}

/// Data for updating an existing user via user management.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// The user ID to update.
    pub id: Uuid,
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
    /// New password hash (admin password reset).
    pub password_hash: Option<String>,
}
