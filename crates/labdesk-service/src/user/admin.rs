//! User account management and the superadmin bootstrap.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use labdesk_auth::password::PasswordHasher;
use labdesk_auth::policy::guard;
use labdesk_core::config::auth::AuthConfig;
use labdesk_core::config::bootstrap::BootstrapConfig;
use labdesk_core::error::AppError;
use labdesk_database::repositories::user::UserRepository;
use labdesk_entity::user::model::{CreateUser, UpdateUser};
use labdesk_entity::user::{Department, User, UserRole};

use crate::context::RequestContext;

/// Handles user account administration.
#[derive(Debug, Clone)]
pub struct UserAdminService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    password_min_length: usize,
}

/// Data for registering a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserAccount {
    /// Desired login name.
    pub username: String,
    /// Plaintext password; hashed before storage.
    pub password: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Assigned role.
    pub role: UserRole,
    /// Assigned department.
    pub department: Department,
}

/// Changes to an existing account. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccountChanges {
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
    /// New plaintext password (admin reset); hashed before storage.
    pub password: Option<String>,
}

impl UserAdminService {
    /// Creates a new user administration service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        auth_config: &AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            password_min_length: auth_config.password_min_length,
        }
    }

    /// Registers a new user account.
    pub async fn register(
        &self,
        ctx: &RequestContext,
        data: NewUserAccount,
    ) -> Result<User, AppError> {
        let actor = ctx.actor();
        guard::require_manage_users(&actor)?;
        guard::require_manage_user_with_role(&actor, data.role)?;

        let username = data.username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username cannot be empty"));
        }
        if data.first_name.trim().is_empty() || data.last_name.trim().is_empty() {
            return Err(AppError::validation("First and last name are required"));
        }
        self.validate_password(&data.password)?;

        let password_hash = self.hasher.hash_password(&data.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                password_hash,
                first_name: data.first_name.trim().to_string(),
                last_name: data.last_name.trim().to_string(),
                role: data.role,
                department: data.department,
            })
            .await?;

        info!(
            user_id = %user.id,
            username = %user.username,
            role = %user.role,
            created_by = %ctx.user_id,
            "User account created"
        );

        Ok(user)
    }

    /// Lists all user accounts.
    pub async fn list_users(&self, ctx: &RequestContext) -> Result<Vec<User>, AppError> {
        guard::require_manage_users(&ctx.actor())?;
        self.user_repo.find_all().await
    }

    /// Updates an existing account.
    ///
    /// Acting on a privileged account, or granting a privileged role,
    /// requires a superadmin.
    pub async fn update_user(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        changes: UserAccountChanges,
    ) -> Result<User, AppError> {
        let actor = ctx.actor();
        guard::require_manage_users(&actor)?;

        let target = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;

        guard::require_manage_user_with_role(&actor, target.role)?;
        if let Some(new_role) = changes.role {
            guard::require_manage_user_with_role(&actor, new_role)?;
        }

        let password_hash = match changes.password {
            Some(ref password) => {
                self.validate_password(password)?;
                Some(self.hasher.hash_password(password)?)
            }
            None => None,
        };

        let user = self
            .user_repo
            .update(&UpdateUser {
                id: user_id,
                first_name: changes.first_name,
                last_name: changes.last_name,
                role: changes.role,
                department: changes.department,
                active: changes.active,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, updated_by = %ctx.user_id, "User account updated");

        Ok(user)
    }

    /// Deletes an account. Self-deletion is rejected.
    pub async fn delete_user(&self, ctx: &RequestContext, user_id: Uuid) -> Result<(), AppError> {
        let actor = ctx.actor();
        guard::require_manage_users(&actor)?;

        if user_id == ctx.user_id {
            return Err(AppError::validation("You cannot delete your own account"));
        }

        let target = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;

        guard::require_manage_user_with_role(&actor, target.role)?;

        self.user_repo.delete(user_id).await?;

        info!(user_id = %user_id, deleted_by = %ctx.user_id, "User account deleted");

        Ok(())
    }

    /// Seeds the initial superadmin account when none exists.
    ///
    /// Runs at startup so a freshly provisioned deployment can log in
    /// and start creating accounts.
    pub async fn ensure_superadmin(&self, config: &BootstrapConfig) -> Result<(), AppError> {
        if !config.seed_superadmin {
            return Ok(());
        }

        if self.user_repo.exists_with_role(UserRole::Superadmin).await? {
            return Ok(());
        }

        let department = Department::from_str(&config.superadmin_department).map_err(|_| {
            AppError::configuration(format!(
                "Invalid bootstrap department: {}",
                config.superadmin_department
            ))
        })?;

        let password_hash = self.hasher.hash_password(&config.superadmin_password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: config.superadmin_username.clone(),
                password_hash,
                first_name: config.superadmin_first_name.clone(),
                last_name: config.superadmin_last_name.clone(),
                role: UserRole::Superadmin,
                department,
            })
            .await?;

        warn!(
            user_id = %user.id,
            username = %user.username,
            "Seeded initial superadmin account; change its password"
        );

        Ok(())
    }

    fn validate_password(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }
        Ok(())
    }
}
