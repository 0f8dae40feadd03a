//! Superadmin bootstrap configuration.
//!
//! On startup the server seeds a superadmin account when none exists, so
//! a freshly provisioned deployment can log in and manage users.

use serde::{Deserialize, Serialize};

/// Settings for the initial superadmin account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Whether to seed a superadmin when none exists.
    #[serde(default = "default_true")]
    pub seed_superadmin: bool,
    /// Username of the seeded superadmin.
    #[serde(default = "default_username")]
    pub superadmin_username: String,
    /// Initial password of the seeded superadmin.
    #[serde(default = "default_password")]
    pub superadmin_password: String,
    /// First name of the seeded superadmin.
    #[serde(default = "default_first_name")]
    pub superadmin_first_name: String,
    /// Last name of the seeded superadmin.
    #[serde(default = "default_last_name")]
    pub superadmin_last_name: String,
    /// Department of the seeded superadmin.
    #[serde(default = "default_department")]
    pub superadmin_department: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            seed_superadmin: default_true(),
            superadmin_username: default_username(),
            superadmin_password: default_password(),
            superadmin_first_name: default_first_name(),
            superadmin_last_name: default_last_name(),
            superadmin_department: default_department(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_username() -> String {
    "superadmin".to_string()
}

fn default_password() -> String {
    "superadmin123".to_string()
}

fn default_first_name() -> String {
    "System".to_string()
}

fn default_last_name() -> String {
    "Administrator".to_string()
}

fn default_department() -> String {
    "Laboratory".to_string()
}
