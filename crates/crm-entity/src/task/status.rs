//! Derived task status.

use serde::{Deserialize, Serialize};

/// Status computed from `completedAt`, `dueAt` and the current time.
/// Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    Completed,
    Overdue,
    DueToday,
    Open,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
            Self::DueToday => "Due today",
            Self::Open => "Open",
        }
    }
}
