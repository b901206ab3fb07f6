//! Create/update payload for companies.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::serde_util::blank_string;

/// Body of `POST /api/companies` and `PUT /api/companies/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "blank_string")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "blank_string")]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "blank_string")]
    #[validate(url(message = "Invalid website URL"))]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "blank_string")]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "blank_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "blank_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "blank_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "blank_string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "blank_string")]
    pub zip_code: Option<String>,
    #[serde(default, deserialize_with = "blank_string")]
    pub country: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "Employees cannot be negative"))]
    pub employees: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Revenue cannot be negative"))]
    pub revenue: Option<f64>,
    #[serde(default, deserialize_with = "blank_string")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_only_is_valid() {
        let input: CompanyInput = serde_json::from_str(r#"{"name": "Acme"}"#).unwrap();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_invalid() {
        let input: CompanyInput = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_negative_employees_is_invalid() {
        let input: CompanyInput =
            serde_json::from_str(r#"{"name": "Acme", "employees": -3}"#).unwrap();
        assert!(input.validate().is_err());
    }
}
