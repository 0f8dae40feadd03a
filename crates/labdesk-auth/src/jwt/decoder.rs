//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use labdesk_core::config::auth::AuthConfig;
use labdesk_core::error::AppError;

use super::claims::Claims;

/// Validates JWT tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string, checking signature and expiry.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use labdesk_entity::user::{Department, User, UserRole};
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_ttl_hours: 1,
            password_min_length: 8,
        }
    }

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "jdoe".to_string(),
            password_hash: "x".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            role: UserRole::Admin,
            department: Department::Imaging,
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let config = test_config();
        let user = test_user();
        let issued = JwtEncoder::new(&config).generate_token(&user).unwrap();

        let claims = JwtDecoder::new(&config).decode_token(&issued.token).unwrap();
        assert_eq!(claims.user_id(), user.id);
        assert_eq!(claims.username, "jdoe");
        assert_eq!(claims.role, UserRole::Admin);
        assert_eq!(claims.department, Department::Imaging);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let user = test_user();
        let issued = JwtEncoder::new(&test_config()).generate_token(&user).unwrap();

        let other = AuthConfig {
            jwt_secret: "different-secret".to_string(),
            jwt_ttl_hours: 1,
            password_min_length: 8,
        };
        assert!(JwtDecoder::new(&other).decode_token(&issued.token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(
            JwtDecoder::new(&test_config())
                .decode_token("not-a-jwt")
                .is_err()
        );
    }
}
