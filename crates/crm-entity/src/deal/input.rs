//! Create/update payload for deals.
//!
//! `amount`, `status` and `closeDate` arrive loosely typed from edit
//! dialogs and are coerced by the deal service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::status::DealStatus;
use crate::serde_util::{blank_string, blank_uuid};

/// Body of `POST /api/deals` and `PUT /api/deals/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DealInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Number or numeric string.
    #[serde(default)]
    pub amount: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "blank_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "blank_string")]
    pub close_date: Option<String>,
    #[serde(default, deserialize_with = "blank_uuid")]
    pub company_id: Option<Uuid>,
    #[serde(default, deserialize_with = "blank_uuid")]
    pub contact_id: Option<Uuid>,
    #[serde(default, deserialize_with = "blank_uuid")]
    pub stage_id: Option<Uuid>,
}

/// Fully typed deal values, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct DealChanges {
    pub title: String,
    pub amount: f64,
    pub status: DealStatus,
    pub close_date: Option<DateTime<Utc>>,
    pub company_id: Option<Uuid>,
    pub contact_id: Option<Uuid>,
    pub stage_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loose_fields_deserialize() {
        let input: DealInput = serde_json::from_str(
            r#"{"title": "Renewal", "amount": "1200.50", "status": "", "companyId": ""}"#,
        )
        .unwrap();
        assert_eq!(input.amount, Some(serde_json::json!("1200.50")));
        assert!(input.status.is_none());
        assert!(input.company_id.is_none());
        assert!(input.validate().is_ok());
    }
}
