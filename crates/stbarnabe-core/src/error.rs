//! Unified application error types for St-Barnabe.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The HTTP layer translates an
//! `AppError` into a status code and a problem body in one place.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// The request was rejected for a named entity with a short reason code.
    BadRequest,
    /// Input validation failed.
    Validation,
    /// A conflict occurred (duplicate entry, constraint violation, etc.).
    Conflict,
    /// An internal server error occurred.
    Internal,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An I/O error occurred.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::BadRequest => write!(f, "BAD_REQUEST"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Io => write!(f, "IO"),
        }
    }
}

/// Entity name and reason code attached to a [`ErrorKind::BadRequest`] error.
///
/// Clients use the pair to pick a translated message (`error.<error_key>`)
/// and to know which entity form to highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadRequestAlert {
    /// Entity token, e.g. `versement`.
    pub entity_name: String,
    /// Short reason code, e.g. `idexists`.
    pub error_key: String,
}

/// A single constraint violation on a request body field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// Name of the object that failed validation.
    pub object_name: String,
    /// Offending field.
    pub field: String,
    /// Constraint code, e.g. `range` or `length`.
    pub message: String,
}

/// The unified application error used throughout St-Barnabe.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Entity/reason pair for `BadRequest` errors.
    pub alert: Option<BadRequestAlert>,
    /// Field-level violations for `Validation` errors.
    pub field_errors: Vec<FieldError>,
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
            alert: None,
            field_errors: Vec::new(),
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
            source: Some(Box::new(source)),
            ..Self::new(kind, message)
        }
    }

    /// Create a client error naming the entity and a reason code.
    pub fn bad_request_alert(
        message: impl Into<String>,
        entity_name: impl Into<String>,
        error_key: impl Into<String>,
    ) -> Self {
        Self {
            alert: Some(BadRequestAlert {
                entity_name: entity_name.into(),
                error_key: error_key.into(),
            }),
            ..Self::new(ErrorKind::BadRequest, message)
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a validation error carrying field-level violations.
    pub fn field_validation(message: impl Into<String>, field_errors: Vec<FieldError>) -> Self {
        Self {
            field_errors,
            ..Self::new(ErrorKind::Validation, message)
        }
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Reason code of a `BadRequest` error, if any.
    pub fn error_key(&self) -> Option<&str> {
        self.alert.as_ref().map(|a| a.error_key.as_str())
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            alert: self.alert.clone(),
            field_errors: self.field_errors.clone(),
            source: None,
        }
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

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Io, format!("I/O error: {err}"), err)
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

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => ErrorKind::Conflict,
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => ErrorKind::Conflict,
            _ => ErrorKind::Database,
        };
        Self::with_source(kind, format!("Database error: {err}"), err)
    }
}
