//! Raw cell values and their comparison rules.

use std::cmp::Ordering;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// The raw value of one column of one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Absent value. Displays as the empty string.
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(DateTime<Utc>),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// String form used for display, search, filtering and CSV.
    pub fn display(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Date(d) => d.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Ascending order between two values of a column.
    ///
    /// Numbers compare numerically, text by [`collate`], dates
    /// chronologically; any other pairing compares the string forms.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Text(a), Self::Text(b)) => collate(a, b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => collate(&self.display(), &other.display()),
        }
    }
}

/// Locale-style string order.
///
/// Letters compare by base letter ignoring case and accents, so `é` sorts
/// with `e`. Ties are broken unaccented first, then lowercase first.
pub fn collate(a: &str, b: &str) -> Ordering {
    let base = |s: &str| {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect::<Vec<_>>()
    };
    let accented = |s: &str| s.nfd().flat_map(char::to_lowercase).collect::<Vec<_>>();

    base(a)
        .cmp(&base(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| b.cmp(a))
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Empty)
    }
}
