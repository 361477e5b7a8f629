//! Error types for lightbnb-db
//!
//! Lookups that find nothing return `Ok(None)`; only engine-reported
//! failures become errors, and they are forwarded as-is.

use std::path::PathBuf;

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, DataAccessError>;

/// Failure reported by the store for a single round trip
#[derive(Debug, Error)]
pub enum DataAccessError {
    /// Insert rejected by a uniqueness, foreign-key, not-null or check rule
    #[error("constraint violation{}: {message}", constraint_suffix(.constraint))]
    ConstraintViolation {
        constraint: Option<String>,
        message: String,
        #[source]
        source: sqlx::Error,
    },

    /// Connectivity loss, pool timeout, decode failure or any other engine error
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

fn constraint_suffix(constraint: &Option<String>) -> String {
    constraint
        .as_deref()
        .map(|name| format!(" ({name})"))
        .unwrap_or_default()
}

/// Whether an engine error kind is an integrity-constraint rejection.
pub fn is_constraint_kind(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::UniqueViolation
            | ErrorKind::ForeignKeyViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation
    )
}

impl From<sqlx::Error> for DataAccessError {
    fn from(err: sqlx::Error) -> Self {
        let violation = match &err {
            sqlx::Error::Database(db) if is_constraint_kind(db.kind()) => Some((
                db.constraint().map(str::to_owned),
                db.message().to_owned(),
            )),
            _ => None,
        };

        match violation {
            Some((constraint, message)) => Self::ConstraintViolation {
                constraint,
                message,
                source: err,
            },
            None => Self::Database(err),
        }
    }
}

impl DataAccessError {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }

    /// Name of the violated constraint, when the engine reported one
    pub fn constraint(&self) -> Option<&str> {
        match self {
            Self::ConstraintViolation { constraint, .. } => constraint.as_deref(),
            Self::Database(_) => None,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("invalid database url: {0}")]
    InvalidUrl(#[source] sqlx::Error),
}

impl ConfigError {
    pub fn invalid_value(key: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_kinds() {
        assert!(is_constraint_kind(ErrorKind::UniqueViolation));
        assert!(is_constraint_kind(ErrorKind::ForeignKeyViolation));
        assert!(is_constraint_kind(ErrorKind::NotNullViolation));
        assert!(is_constraint_kind(ErrorKind::CheckViolation));
        assert!(!is_constraint_kind(ErrorKind::Other));
    }

    #[test]
    fn non_database_errors_are_not_violations() {
        let err: DataAccessError = sqlx::Error::PoolTimedOut.into();
        assert!(!err.is_constraint_violation());
        assert!(err.constraint().is_none());
        assert!(err.to_string().starts_with("database error"));

        let err: DataAccessError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DataAccessError::Database(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn constraint_violation_display() {
        let err = DataAccessError::ConstraintViolation {
            constraint: Some("users_email_key".to_string()),
            message: "duplicate key value violates unique constraint".to_string(),
            source: sqlx::Error::RowNotFound,
        };
        assert_eq!(
            err.to_string(),
            "constraint violation (users_email_key): duplicate key value violates unique constraint"
        );
        assert_eq!(err.constraint(), Some("users_email_key"));

        let err = DataAccessError::ConstraintViolation {
            constraint: None,
            message: "null value in column".to_string(),
            source: sqlx::Error::RowNotFound,
        };
        assert_eq!(err.to_string(), "constraint violation: null value in column");
    }

    #[test]
    fn invalid_value_display() {
        let err = ConfigError::invalid_value("PGPORT", "abc");
        assert_eq!(err.to_string(), "invalid value 'abc' for PGPORT");
    }
}
