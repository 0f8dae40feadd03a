//! `AuthUser` extractor — pulls the JWT from the request, validates
//! it, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use labdesk_core::error::AppError;
use labdesk_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// The token is read from the `x-auth-token` header; a standard
/// `Authorization: Bearer` header is accepted as a fallback.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts)
            .ok_or_else(|| AppError::authentication("Missing authentication token"))?;

        let claims = state.jwt_decoder.decode_token(token)?;

        let ctx = RequestContext::new(
            claims.user_id(),
            claims.username,
            claims.display_name,
            claims.role,
            claims.department,
        );

        Ok(AuthUser(ctx))
    }
}

fn extract_token(parts: &Parts) -> Option<&str> {
    if let Some(token) = parts.headers.get("x-auth-token").and_then(|v| v.to_str().ok()) {
        return Some(token);
    }

    parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}
