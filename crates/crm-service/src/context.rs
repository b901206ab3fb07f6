//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crm_entity::user::SessionUser;

/// Context for the current authenticated request.
///
/// Extracted from the bearer token and passed into service methods so that
/// every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    pub email: String,
    pub name: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(user: SessionUser) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            name: user.name,
            request_time: Utc::now(),
        }
    }

    /// The session identity, as returned by `GET /api/auth/session`.
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            id: self.user_id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}
