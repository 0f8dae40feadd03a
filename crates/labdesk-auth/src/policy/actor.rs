//! The acting user as seen by the policy layer.

use uuid::Uuid;

use labdesk_entity::user::{Department, UserRole};

/// The authenticated user attempting an action.
///
/// Built from validated JWT claims; the policy layer never loads users
/// from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// User identifier.
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Role.
    pub role: UserRole,
    /// Department.
    pub department: Department,
}

impl Actor {
    /// Creates a new actor.
    pub fn new(id: Uuid, username: impl Into<String>, role: UserRole, department: Department) -> Self {
        Self {
            id,
            username: username.into(),
            role,
            department,
        }
    }

    /// Whether this actor is an admin of the given department.
    pub fn is_department_admin(&self, department: Department) -> bool {
        self.role == UserRole::Admin && self.department == department
    }
}
