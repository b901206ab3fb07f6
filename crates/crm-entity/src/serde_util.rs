//! Lenient deserializers for form-style payloads.
//!
//! Edit dialogs submit empty strings for untouched optional inputs. These
//! helpers read them as absent instead of failing the whole request.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_flexible_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `Option<String>` where blank strings become `None`.
pub fn blank_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// `Option<Uuid>` where blank strings become `None`.
pub fn blank_uuid<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => Uuid::parse_str(s.trim())
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// `Option<DateTime<Utc>>` accepting RFC 3339, `YYYY-MM-DD`, or blank.
pub fn flexible_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_flexible_datetime(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: '{s}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "blank_uuid")]
        id: Option<Uuid>,
        #[serde(default, deserialize_with = "blank_string")]
        note: Option<String>,
        #[serde(default, deserialize_with = "flexible_datetime")]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_blank_values_are_none() {
        let p: Payload = serde_json::from_str(r#"{"id": "", "note": "  ", "at": ""}"#).unwrap();
        assert!(p.id.is_none());
        assert!(p.note.is_none());
        assert!(p.at.is_none());
    }

    #[test]
    fn test_missing_fields_are_none() {
        let p: Payload = serde_json::from_str("{}").unwrap();
        assert!(p.id.is_none() && p.note.is_none() && p.at.is_none());
    }

    #[test]
    fn test_invalid_uuid_is_rejected() {
        assert!(serde_json::from_str::<Payload>(r#"{"id": "nope"}"#).is_err());
    }

    #[test]
    fn test_date_only_is_midnight_utc() {
        let dt = parse_flexible_datetime("2024-03-05").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 3, 5));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_rfc3339_offset_is_normalized() {
        let dt = parse_flexible_datetime("2024-03-05T10:00:00+02:00").unwrap();
        assert_eq!(dt.hour(), 8);
        assert!(parse_flexible_datetime("05/03/2024").is_none());
    }
}
