//! Task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::TaskStatus;
use crate::refs::{CompanyRef, ContactRef, DealRef};

/// A to-do item owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub due_at: Option<DateTime<Utc>>,
    /// Presence means the task is done.
    pub completed_at: Option<DateTime<Utc>>,
    pub company_id: Option<Uuid>,
    pub contact_id: Option<Uuid>,
    pub deal_id: Option<Uuid>,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Status as of `now`. Completion wins over any due date.
    pub fn status_at(&self, now: DateTime<Utc>) -> TaskStatus {
        if self.completed_at.is_some() {
            return TaskStatus::Completed;
        }
        match self.due_at {
            Some(due) if due < now => TaskStatus::Overdue,
            Some(due) if due.date_naive() == now.date_naive() => TaskStatus::DueToday,
            _ => TaskStatus::Open,
        }
    }
}

/// A task with its linked records embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    #[serde(flatten)]
    pub task: Task,
    #[serde(default)]
    pub company: Option<CompanyRef>,
    #[serde(default)]
    pub contact: Option<ContactRef>,
    #[serde(default)]
    pub deal: Option<DealRef>,
}
