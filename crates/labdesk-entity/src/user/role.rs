//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the intranet.
///
/// Roles are ordered by privilege level: Superadmin > Admin > It > User.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular staff member.
    User,
    /// Department administrator; authority is scoped to their department.
    Admin,
    /// IT staff; can archive/unarchive content across departments.
    It,
    /// Full system administrator.
    Superadmin,
}

impl UserRole {
    /// Return the privilege level (higher = more privileged).
    pub fn privilege_level(&self) -> u8 {
        match self {
            Self::Superadmin => 4,
            Self::Admin => 3,
            Self::It => 2,
            Self::User => 1,
        }
    }

    /// Check if this role has at least the given role's privileges.
    pub fn has_at_least(&self, other: &UserRole) -> bool {
        self.privilege_level() >= other.privilege_level()
    }

    /// Check if this role is a superadmin.
    pub fn is_superadmin(&self) -> bool {
        matches!(self, Self::Superadmin)
    }

    /// Check if this role is an admin or superadmin.
    pub fn is_admin_or_above(&self) -> bool {
        matches!(self, Self::Admin | Self::Superadmin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::It => "it",
            Self::Superadmin => "superadmin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = labdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "it" => Ok(Self::It),
            "superadmin" => Ok(Self::Superadmin),
            _ => Err(labdesk_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: user, admin, it, superadmin"
            ))),
        }
    }
}
