//! Coercion of loosely typed deal payloads.
//!
//! Edit dialogs post `amount` as a number or a string, `status` as free
//! text, and `closeDate` as either a timestamp or a bare date.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crm_core::error::AppError;
use crm_core::result::AppResult;
use crm_entity::deal::{DealChanges, DealInput, DealStatus};
use crm_entity::serde_util::parse_flexible_datetime;

/// Turn a raw payload into typed values, or a `Validation` error.
pub fn coerce(input: &DealInput) -> AppResult<DealChanges> {
    Ok(DealChanges {
        title: input.title.trim().to_string(),
        amount: coerce_amount(input.amount.as_ref()),
        status: parse_status(input.status.as_deref())?,
        close_date: parse_close_date(input.close_date.as_deref())?,
        company_id: input.company_id,
        contact_id: input.contact_id,
        stage_id: input.stage_id,
    })
}

/// Numbers pass through; strings use their leading numeric prefix.
/// Anything unparseable or non-finite is 0.
pub fn coerce_amount(raw: Option<&Value>) -> f64 {
    let value = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_numeric_prefix(s),
        _ => None,
    };
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Missing or blank means `OPEN`.
pub fn parse_status(raw: Option<&str>) -> AppResult<DealStatus> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(DealStatus::Open),
        Some(s) => s.parse::<DealStatus>().map_err(|e| {
            let message = e.message.clone();
            e.with_details(serde_json::json!({ "status": [message] }))
        }),
    }
}

pub fn parse_close_date(raw: Option<&str>) -> AppResult<Option<DateTime<Utc>>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => parse_flexible_datetime(s).map(Some).ok_or_else(|| {
            let message = format!("Invalid close date: '{s}'");
            AppError::validation(message.clone())
                .with_details(serde_json::json!({ "closeDate": [message] }))
        }),
    }
}

/// Longest prefix of `s` (after leading whitespace) that reads as a decimal
/// number: sign, digits, fraction, exponent.
fn parse_numeric_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_core::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_amount_from_number_and_string() {
        assert_eq!(coerce_amount(Some(&json!(1500))), 1500.0);
        assert_eq!(coerce_amount(Some(&json!("2500.75"))), 2500.75);
        assert_eq!(coerce_amount(Some(&json!("  42abc"))), 42.0);
        assert_eq!(coerce_amount(Some(&json!("1e3 dollars"))), 1000.0);
        assert_eq!(coerce_amount(Some(&json!(".5"))), 0.5);
        assert_eq!(coerce_amount(Some(&json!("-7."))), -7.0);
    }

    #[test]
    fn test_amount_falls_back_to_zero() {
        assert_eq!(coerce_amount(None), 0.0);
        assert_eq!(coerce_amount(Some(&Value::Null)), 0.0);
        assert_eq!(coerce_amount(Some(&json!("abc"))), 0.0);
        assert_eq!(coerce_amount(Some(&json!(""))), 0.0);
        assert_eq!(coerce_amount(Some(&json!("."))), 0.0);
        assert_eq!(coerce_amount(Some(&json!(true))), 0.0);
        assert_eq!(coerce_amount(Some(&json!("1e999"))), 0.0);
    }

    #[test]
    fn test_dangling_exponent_is_ignored() {
        assert_eq!(coerce_amount(Some(&json!("12e"))), 12.0);
        assert_eq!(coerce_amount(Some(&json!("12e+"))), 12.0);
    }

    #[test]
    fn test_status_defaults_to_open() {
        assert_eq!(parse_status(None).unwrap(), DealStatus::Open);
        assert_eq!(parse_status(Some("  ")).unwrap(), DealStatus::Open);
        assert_eq!(parse_status(Some("won")).unwrap(), DealStatus::Won);
    }

    #[test]
    fn test_unknown_status_is_validation_error() {
        let err = parse_status(Some("MAYBE")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.details.unwrap().get("status").is_some());
    }

    #[test]
    fn test_close_date_formats() {
        assert!(parse_close_date(None).unwrap().is_none());
        assert!(parse_close_date(Some("2024-12-31")).unwrap().is_some());
        assert!(parse_close_date(Some("2024-12-31T09:30:00Z")).unwrap().is_some());
        assert!(parse_close_date(Some("next week")).is_err());
    }

    #[test]
    fn test_coerce_full_payload() {
        let input: DealInput = serde_json::from_value(json!({
            "title": " Enterprise License ",
            "amount": "50000",
            "status": "PENDING",
            "closeDate": "2025-01-15"
        }))
        .unwrap();
        let changes = coerce(&input).unwrap();
        assert_eq!(changes.title, "Enterprise License");
        assert_eq!(changes.amount, 50000.0);
        assert_eq!(changes.status, DealStatus::Pending);
        assert!(changes.close_date.is_some());
        assert!(changes.company_id.is_none());
    }
}
