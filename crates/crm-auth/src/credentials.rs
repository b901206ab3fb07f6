//! Email/password verification.
//!
//! The development account configured under `auth.dev_*` is accepted
//! without touching the database when `auth.dev_fallback_enabled` is set.
//! Otherwise the user is looked up by email and the stored Argon2 hash is
//! checked. Lookup failures are logged and reported as a failed sign-in.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crm_core::config::AuthConfig;
use crm_core::error::AppError;
use crm_core::result::AppResult;
use crm_database::repositories::UserRepository;
use crm_entity::user::{SessionUser, User};

use crate::password::PasswordHasher;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Source of stored users for credential checks.
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

#[async_trait]
impl UserLookup for UserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        UserRepository::find_by_email(self, email).await
    }
}

/// Verifies sign-in credentials.
#[derive(Clone)]
pub struct CredentialVerifier {
    users: Arc<dyn UserLookup>,
    hasher: PasswordHasher,
    config: AuthConfig,
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier")
            .field("dev_fallback_enabled", &self.config.dev_fallback_enabled)
            .finish()
    }
}

impl CredentialVerifier {
    pub fn new(users: Arc<dyn UserLookup>, config: AuthConfig) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(),
            config,
        }
    }

    /// Return the identity for valid credentials, or `Unauthorized`.
    pub async fn verify(&self, email: &str, password: &str) -> AppResult<SessionUser> {
        let email = email.trim();

        if let Some(user) = self.dev_fallback(email, password) {
            warn!(email = %email, "Development sign-in fallback accepted");
            return Ok(user);
        }

        let user = match self.users.find_by_email(email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                info!(email = %email, "Sign-in rejected: unknown email");
                return Err(AppError::unauthorized(INVALID_CREDENTIALS));
            }
            Err(e) => {
                warn!(email = %email, error = %e, "User lookup failed during sign-in");
                return Err(AppError::unauthorized(INVALID_CREDENTIALS));
            }
        };

        let Some(hash) = user.password_hash.as_deref() else {
            info!(user_id = %user.id, "Sign-in rejected: account has no password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        match self.hasher.verify_password(password, hash) {
            Ok(true) => {
                info!(user_id = %user.id, "Credentials verified");
                Ok(SessionUser::from(&user))
            }
            Ok(false) => {
                info!(user_id = %user.id, "Sign-in rejected: wrong password");
                Err(AppError::unauthorized(INVALID_CREDENTIALS))
            }
            Err(e) => {
                warn!(user_id = %user.id, error = %e, "Stored password hash is unusable");
                Err(AppError::unauthorized(INVALID_CREDENTIALS))
            }
        }
    }

    fn dev_fallback(&self, email: &str, password: &str) -> Option<SessionUser> {
        let cfg = &self.config;
        let matches = cfg.dev_fallback_enabled
            && email == cfg.dev_email
            && password == cfg.dev_password;

        matches.then(|| SessionUser {
            id: cfg.dev_user_id,
            email: cfg.dev_email.clone(),
            name: Some(cfg.dev_name.clone()),
        })
    }
}
