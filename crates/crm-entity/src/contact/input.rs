//! Create/update payload for contacts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::serde_util::{blank_string, blank_uuid};

/// Body of `POST /api/contacts` and `PUT /api/contacts/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[serde(default, deserialize_with = "blank_string")]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "blank_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "blank_string")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "blank_uuid")]
    pub company_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_names_fail_validation() {
        let input: ContactInput = serde_json::from_str(r#"{"lastName": "Chen"}"#).unwrap();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
        assert!(!errors.field_errors().contains_key("last_name"));
    }

    #[test]
    fn test_blank_email_is_accepted() {
        let input: ContactInput =
            serde_json::from_str(r#"{"firstName": "A", "lastName": "B", "email": ""}"#).unwrap();
        assert!(input.email.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let input: ContactInput =
            serde_json::from_str(r#"{"firstName": "A", "lastName": "B", "email": "nope"}"#)
                .unwrap();
        assert!(input.validate().is_err());
    }
}
