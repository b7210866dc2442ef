//! HTTP request handlers, one module per resource.

pub mod employe;
pub mod health;
pub mod versement;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// 200 with the value as body, or 404 with an empty body.
pub fn wrap_or_not_found<T: Serialize>(value: Option<T>) -> Response {
    match value {
        Some(value) => (StatusCode::OK, Json(value)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
