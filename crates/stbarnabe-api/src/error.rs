//! Maps domain `AppError` to HTTP problem responses.
//!
//! [`ApiError`] wraps the core error so the response conversion can live in
//! this crate. Handlers return it and `?` converts any `AppError`.

use axum::Json;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use stbarnabe_core::error::{AppError, ErrorKind, FieldError};

/// Base URL of the problem type identifiers understood by clients.
pub const PROBLEM_BASE_URL: &str = "http://www.jhipster.tech/problem";
/// Media type of problem bodies.
pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Problem body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Problem type URI.
    #[serde(rename = "type")]
    pub problem_type: String,
    /// Short summary.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Translation key, e.g. `error.idexists` or `error.http.404`.
    pub message: String,
    /// Human-readable explanation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Parameter for the translation key (the entity name for alerts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
    /// Entity the request was about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    /// Reason code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_key: Option<String>,
    /// Constraint violations on the request body.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub field_errors: Vec<FieldError>,
}

impl Problem {
    fn http(status: StatusCode, detail: Option<String>) -> Self {
        Self {
            problem_type: "about:blank".to_string(),
            title: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
            status: status.as_u16(),
            message: format!("error.http.{}", status.as_u16()),
            detail,
            params: None,
            entity_name: None,
            error_key: None,
            field_errors: Vec::new(),
        }
    }
}

/// Status code an error kind maps to.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::BadRequest | ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Io => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Build the problem body for an error.
pub fn problem_for(err: &AppError) -> Problem {
    let status = status_for(err.kind);

    match (&err.kind, &err.alert) {
        (ErrorKind::BadRequest, Some(alert)) => Problem {
            problem_type: format!("{PROBLEM_BASE_URL}/problem-with-message"),
            title: err.message.clone(),
            message: format!("error.{}", alert.error_key),
            params: Some(alert.entity_name.clone()),
            entity_name: Some(alert.entity_name.clone()),
            error_key: Some(alert.error_key.clone()),
            ..Problem::http(status, None)
        },
        (ErrorKind::Validation, _) if !err.field_errors.is_empty() => Problem {
            problem_type: format!("{PROBLEM_BASE_URL}/constraint-violation"),
            title: "Method argument not valid".to_string(),
            message: "error.validation".to_string(),
            field_errors: err.field_errors.clone(),
            ..Problem::http(status, None)
        },
        _ if status.is_server_error() => Problem::http(status, None),
        _ => Problem::http(status, Some(err.message.clone())),
    }
}

/// HTTP-facing error returned by handlers and extractors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self(err) = self;
        let status = status_for(err.kind);
        if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err.message, "Request failed");
        } else {
            tracing::debug!(kind = %err.kind, error = %err.message, "Request rejected");
        }

        let body = problem_for(&err);
        let mut response = (
            status,
            [(CONTENT_TYPE, PROBLEM_CONTENT_TYPE)],
            Json(body),
        )
            .into_response();

        // Picked up by the alert middleware, which knows the application name.
        if let Some(alert) = err.alert {
            response.extensions_mut().insert(alert);
        }
        response
    }
}
