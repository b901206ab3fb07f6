//! Compact references embedded in list responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `{ id, name }` of a linked company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRef {
    pub id: Uuid,
    pub name: String,
}

/// `{ id, firstName, lastName }` of a linked contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRef {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl ContactRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// `{ id, name }` of a pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageRef {
    pub id: Uuid,
    pub name: String,
}

/// `{ id, title }` of a linked deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealRef {
    pub id: Uuid,
    pub title: String,
}

