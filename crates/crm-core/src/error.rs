//! Unified application error types for Acme CRM.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The HTTP mapping lives here as well
//! so that handlers can return `AppResult<T>` directly.

use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::types::response::ApiErrorResponse;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Input validation failed.
    Validation,
    /// No session, or the session token is invalid or expired.
    Unauthorized,
    /// The caller is authenticated but may not perform the action.
    Forbidden,
    /// The requested resource was not found.
    NotFound,
    /// A conflict occurred (duplicate entry).
    Conflict,
    /// An internal server error occurred.
    Internal,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// A remote service (the CRM API, from the client's view) failed.
    ExternalService,
    /// The service is temporarily unavailable.
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP status code for this kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::ExternalService => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal | Self::Database | Self::Configuration | Self::Serialization => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Machine-readable code written into the `error` field of responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::ExternalService => "EXTERNAL_SERVICE_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::Internal | Self::Database | Self::Configuration | Self::Serialization => {
                "INTERNAL_ERROR"
            }
        }
    }

    /// Parse a response code back into a kind. Used by the HTTP client.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::Validation,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            503 => Self::ServiceUnavailable,
            _ => Self::ExternalService,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "VALIDATION"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::ExternalService => write!(f, "EXTERNAL_SERVICE"),
            Self::ServiceUnavailable => write!(f, "SERVICE_UNAVAILABLE"),
        }
    }
}

/// The unified application error used throughout the CRM.
///
/// `details` carries structured data for the response body, e.g. the
/// field-to-messages map of a failed validation.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional structured details returned to the caller.
    pub details: Option<serde_json::Value>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
            source: Some(Box::new(source)),
        }
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    pub fn external_service(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExternalService, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }

    /// Whether this error is a server-side fault (5xx).
    pub fn is_server_error(&self) -> bool {
        self.kind.status_code().is_server_error()
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            details: self.details.clone(),
            source: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.kind.status_code();

        // Server faults never leak their message to the caller.
        let message = if self.is_server_error() && self.kind != ErrorKind::ServiceUnavailable {
            tracing::error!(
                kind = %self.kind,
                error = %self.message,
                source = ?self.source,
                "Internal server error"
            );
            "An internal error occurred".to_string()
        } else {
            self.message
        };

        let body = ApiErrorResponse {
            error: self.kind.code().to_string(),
            message,
            details: self.details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::not_found("Record not found"),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                let message = format!("Duplicate record: {}", db.message());
                Self::with_source(ErrorKind::Conflict, message, err)
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => Self::with_source(
                ErrorKind::ServiceUnavailable,
                "Database is unavailable",
                err,
            ),
            _ => Self::with_source(ErrorKind::Database, format!("Database error: {err}"), err),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = serde_json::Map::new();
        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<serde_json::Value> = field_errors
                .iter()
                .map(|e| {
                    let text = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", e.code));
                    serde_json::Value::String(text)
                })
                .collect();
            fields.insert(camel_case(&field), serde_json::Value::Array(messages));
        }

        Self::validation("Validation failed").with_details(serde_json::Value::Object(fields))
    }
}

/// Convert a struct field name to the camelCase key used on the wire.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorKind::Validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorKind::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorKind::Conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorKind::Database.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ErrorKind::ExternalService.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_from_status_round_trips_client_errors() {
        for kind in [
            ErrorKind::Validation,
            ErrorKind::Unauthorized,
            ErrorKind::Forbidden,
            ErrorKind::NotFound,
            ErrorKind::Conflict,
        ] {
            assert_eq!(ErrorKind::from_status(kind.status_code().as_u16()), kind);
        }
        assert_eq!(ErrorKind::from_status(500), ErrorKind::ExternalService);
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_validation_details_use_wire_field_names() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("first_name", validator::ValidationError::new("length"));
        errors.add("email", validator::ValidationError::new("email"));

        let err: AppError = errors.into();
        let details = err.details.unwrap();
        assert!(details.get("firstName").is_some());
        assert!(details.get("first_name").is_none());
        assert!(details.get("email").is_some());
    }

    #[test]
    fn test_camel_case_field_names() {
        assert_eq!(camel_case("first_name"), "firstName");
        assert_eq!(camel_case("company_id"), "companyId");
        assert_eq!(camel_case("title"), "title");
    }

    #[test]
    fn test_clone_keeps_details() {
        let err = AppError::validation("bad").with_details(serde_json::json!({"email": ["x"]}));
        let cloned = err.clone();
        assert_eq!(cloned.details, err.details);
        assert!(cloned.source.is_none());
    }

    #[tokio::test]
    async fn test_internal_error_message_is_hidden() {
        let response = AppError::database("connection reset by peer").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ApiErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "INTERNAL_ERROR");
        assert!(!body.message.contains("connection reset"));
    }
}
