//! Session lifecycle: sign-in issues a token, requests present it back.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crm_core::config::AuthConfig;
use crm_core::error::AppError;
use crm_core::result::AppResult;
use crm_entity::user::SessionUser;

use crate::credentials::CredentialVerifier;
use crate::jwt::{JwtDecoder, JwtEncoder};

/// Body of `POST /api/auth/signin`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResult {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: SessionUser,
}

/// Issues and checks session tokens.
#[derive(Clone)]
pub struct SessionManager {
    verifier: Arc<CredentialVerifier>,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
    password_min_length: u64,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("verifier", &self.verifier)
            .finish()
    }
}

impl SessionManager {
    pub fn new(verifier: Arc<CredentialVerifier>, config: &AuthConfig) -> Self {
        Self {
            verifier,
            encoder: Arc::new(JwtEncoder::new(config)),
            decoder: Arc::new(JwtDecoder::new(config)),
            password_min_length: config.password_min_length,
        }
    }

    /// Validate the request, verify credentials and issue a token.
    pub async fn sign_in(&self, request: &SignInRequest) -> AppResult<SignInResult> {
        request.validate()?;
        if (request.password.chars().count() as u64) < self.password_min_length {
            let message = format!(
                "Password must be at least {} characters",
                self.password_min_length
            );
            return Err(AppError::validation("Validation failed")
                .with_details(serde_json::json!({ "password": [message] })));
        }

        let user = self.verifier.verify(&request.email, &request.password).await?;
        let (token, expires_at) = self.encoder.issue(&user)?;

        info!(user_id = %user.id, expires_at = %expires_at, "Session token issued");

        Ok(SignInResult {
            token,
            expires_at,
            user,
        })
    }

    /// Resolve a bearer token to its session identity.
    pub fn authenticate(&self, token: &str) -> AppResult<SessionUser> {
        let claims = self.decoder.decode(token)?;
        Ok(claims.session_user())
    }
}
