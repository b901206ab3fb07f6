//! Mapping of sqlx errors into [`AppError`].

use crm_core::error::{AppError, ErrorKind};

/// Build a `map_err` adapter that classifies constraint violations.
///
/// Unique violations become `Conflict`, foreign-key violations become
/// `Validation`, pool exhaustion becomes `ServiceUnavailable`, and
/// everything else is a `Database` error carrying `context`.
pub fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        let (kind, message) = match e.as_database_error() {
            Some(db) if db.is_unique_violation() => {
                (ErrorKind::Conflict, format!("{context}: record already exists"))
            }
            Some(db) if db.is_foreign_key_violation() => (
                ErrorKind::Validation,
                format!("{context}: linked record does not exist"),
            ),
            _ if matches!(e, sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed) => (
                ErrorKind::ServiceUnavailable,
                format!("{context}: database unavailable"),
            ),
            _ => (ErrorKind::Database, context.to_string()),
        };
        AppError::with_source(kind, message, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_unavailable() {
        let err = db_error("Failed to list contacts")(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind, ErrorKind::ServiceUnavailable);
    }

    #[test]
    fn test_other_errors_keep_context() {
        let err = db_error("Failed to list contacts")(sqlx::Error::RowNotFound);
        assert_eq!(err.kind, ErrorKind::Database);
        assert_eq!(err.message, "Failed to list contacts");
    }
}
