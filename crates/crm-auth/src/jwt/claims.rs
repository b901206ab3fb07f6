//! JWT claims structure carried by session tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crm_entity::user::SessionUser;

/// JWT claims payload embedded in every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID.
    pub sub: Uuid,
    /// Email at the time of sign-in.
    pub email: String,
    /// Display name at the time of sign-in.
    #[serde(default)]
    pub name: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token id.
    pub jti: Uuid,
}

impl Claims {
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// The session identity encoded in the token.
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            id: self.sub,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}
