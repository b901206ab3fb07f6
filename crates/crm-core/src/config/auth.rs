//! Authentication configuration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sign-in and token settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for HS256 tokens.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: i64,
    /// Minimum accepted password length at sign-in.
    #[serde(default = "default_password_min_length")]
    pub password_min_length: u64,
    /// Accept the fixed development credentials without a database.
    #[serde(default)]
    pub dev_fallback_enabled: bool,
    /// Development account email.
    #[serde(default = "default_dev_email")]
    pub dev_email: String,
    /// Development account password.
    #[serde(default = "default_dev_password")]
    pub dev_password: String,
    /// Development account display name.
    #[serde(default = "default_dev_name")]
    pub dev_name: String,
    /// User id issued to the development account. The demo seed creates
    /// this user and its team.
    #[serde(default = "default_dev_user_id")]
    pub dev_user_id: Uuid,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_minutes: default_token_ttl(),
            password_min_length: default_password_min_length(),
            dev_fallback_enabled: false,
            dev_email: default_dev_email(),
            dev_password: default_dev_password(),
            dev_name: default_dev_name(),
            dev_user_id: default_dev_user_id(),
        }
    }
}

fn default_jwt_secret() -> String {
    "change-me-in-production-please".to_string()
}

fn default_token_ttl() -> i64 {
    60 * 24
}

fn default_password_min_length() -> u64 {
    6
}

fn default_dev_email() -> String {
    "admin@acme.com".to_string()
}

fn default_dev_password() -> String {
    "admin123".to_string()
}

fn default_dev_name() -> String {
    "Admin User".to_string()
}

fn default_dev_user_id() -> Uuid {
    Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0001)
}
