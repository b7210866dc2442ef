//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health report body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: `UP` or `DOWN`.
    pub status: String,
    /// Entity store status.
    pub database: String,
    /// Server version.
    pub version: String,
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database_up = match &state.db_pool {
        Some(pool) => pool.health_check().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }),
        None => true,
    };

    let (status, label) = if database_up {
        (StatusCode::OK, "UP")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "DOWN")
    };

    (
        status,
        Json(HealthResponse {
            status: label.to_string(),
            database: label.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}
