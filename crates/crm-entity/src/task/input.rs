//! Create/update payload for tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::serde_util::{blank_uuid, flexible_datetime};

/// Body of `POST /api/tasks` and `PUT /api/tasks/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default, deserialize_with = "flexible_datetime")]
    pub due_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "flexible_datetime")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "blank_uuid")]
    pub company_id: Option<Uuid>,
    #[serde(default, deserialize_with = "blank_uuid")]
    pub contact_id: Option<Uuid>,
    #[serde(default, deserialize_with = "blank_uuid")]
    pub deal_id: Option<Uuid>,
}
