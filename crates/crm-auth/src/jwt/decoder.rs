//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crm_core::config::AuthConfig;
use crm_core::error::AppError;

use super::claims::Claims;

/// Validates HS256 session tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
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
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Check signature and expiry, returning the claims.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthorized("Session has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid session token signature")
                    }
                    _ => AppError::unauthorized("Invalid session token"),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::JwtEncoder;
    use crm_core::error::ErrorKind;
    use crm_entity::user::SessionUser;
    use uuid::Uuid;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    fn user() -> SessionUser {
        SessionUser {
            id: Uuid::new_v4(),
            email: "mike.davis@techcorp.com".into(),
            name: Some("Mike Davis".into()),
        }
    }

    #[test]
    fn test_issued_token_decodes() {
        let cfg = config("a-sufficiently-long-secret");
        let user = user();
        let (token, exp) = JwtEncoder::new(&cfg).issue(&user).unwrap();
        let claims = JwtDecoder::new(&cfg).decode(&token).unwrap();
        assert_eq!(claims.user_id(), user.id);
        assert_eq!(claims.session_user(), user);
        assert_eq!(claims.exp, exp.timestamp());
    }

    #[test]
    fn test_wrong_secret_is_unauthorized() {
        let (token, _) = JwtEncoder::new(&config("first-secret-value-xx"))
            .issue(&user())
            .unwrap();
        let err = JwtDecoder::new(&config("second-secret-value-x"))
            .decode(&token)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_expired_token_is_unauthorized() {
        let mut cfg = config("a-sufficiently-long-secret");
        cfg.token_ttl_minutes = -10;
        let (token, _) = JwtEncoder::new(&cfg).issue(&user()).unwrap();
        let err = JwtDecoder::new(&cfg).decode(&token).unwrap_err();
        assert_eq!(err.message, "Session has expired");
    }

    #[test]
    fn test_garbage_is_unauthorized() {
        let err = JwtDecoder::new(&config("a-sufficiently-long-secret"))
            .decode("not.a.jwt")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }
}
