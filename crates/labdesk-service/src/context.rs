//! Request context carrying the authenticated user's identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use labdesk_auth::policy::Actor;
use labdesk_entity::user::{Department, UserRole};

/// Context for the current authenticated request.
///
/// Built from validated JWT claims by the API layer and passed into
/// service methods so every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The username from the token claims.
    pub username: String,
    /// The display name from the token claims.
    pub display_name: String,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// The user's department at the time the token was issued.
    pub department: Department,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(
        user_id: Uuid,
        username: String,
        display_name: String,
        role: UserRole,
        department: Department,
    ) -> Self {
        Self {
            user_id,
            username,
            display_name,
            role,
            department,
            request_time: Utc::now(),
        }
    }

    /// The acting user as seen by the policy layer.
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.username.clone(), self.role, self.department)
    }
}
