//! Contact entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::refs::CompanyRef;

/// A person tracked by a team.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique contact identifier.
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    /// Linked company, if any.
    pub company_id: Option<Uuid>,
    /// Owning team. Every read is scoped by this column.
    pub team_id: Uuid,
    /// User who created the contact.
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Display name, "first last".
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A contact together with the name of its linked company.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetail {
    #[serde(flatten)]
    pub contact: Contact,
    /// Derived "first last".
    pub name: String,
    #[serde(default)]
    pub company: Option<CompanyRef>,
}

impl ContactDetail {
    pub fn new(contact: Contact, company: Option<CompanyRef>) -> Self {
        let name = contact.name();
        Self {
            contact,
            name,
            company,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Contact {
        let now = Utc::now();
        Contact {
            id: Uuid::new_v4(),
            first_name: "Robert".into(),
            last_name: "Chen".into(),
            email: Some("robert.chen@innovatesolutions.com".into()),
            phone: None,
            job_title: None,
            company_id: None,
            team_id: Uuid::new_v4(),
            owner_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_name_joins_first_and_last() {
        assert_eq!(sample().name(), "Robert Chen");
    }

    #[test]
    fn test_detail_serializes_flat_camel_case() {
        let detail = ContactDetail::new(sample(), None);
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["firstName"], "Robert");
        assert_eq!(json["name"], "Robert Chen");
        assert!(json.get("teamId").is_some());
        assert!(json["company"].is_null());
    }
}
