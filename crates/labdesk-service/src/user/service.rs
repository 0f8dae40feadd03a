//! Login and user self-service operations.

use std::sync::Arc;

use tracing::{info, warn};

use labdesk_auth::jwt::JwtEncoder;
use labdesk_auth::jwt::encoder::IssuedToken;
use labdesk_auth::password::PasswordHasher;
use labdesk_core::error::AppError;
use labdesk_database::repositories::user::UserRepository;
use labdesk_entity::user::User;

use crate::context::RequestContext;

/// Handles login and profile lookups.
#[derive(Debug, Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
        }
    }

    /// Authenticates a user and issues an access token.
    ///
    /// The same error is returned for an unknown username and a wrong
    /// password so the response does not reveal which accounts exist.
    pub async fn login(&self, username: &str, password: &str) -> Result<(User, IssuedToken), AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid username or password"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            warn!(username = %username, "Login failed: wrong password");
            return Err(AppError::authentication("Invalid username or password"));
        }

        if !user.can_login() {
            warn!(username = %username, "Login rejected: account deactivated");
            return Err(AppError::authentication("This account has been deactivated"));
        }

        let token = self.encoder.generate_token(&user)?;

        info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok((user, token))
    }

    /// Gets the current user's full profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
