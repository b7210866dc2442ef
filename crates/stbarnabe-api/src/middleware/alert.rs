//! Stamps failure alert headers on rejected entity requests.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use stbarnabe_core::error::BadRequestAlert;

use crate::headers::failure_alert;
use crate::state::AppState;

/// Adds `X-{app}-error` / `X-{app}-params` when a handler returned a
/// [`BadRequestAlert`] error.
pub async fn failure_alert_headers(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    if let Some(alert) = response.extensions_mut().remove::<BadRequestAlert>() {
        warn!(
            entity = %alert.entity_name,
            error_key = %alert.error_key,
            "Entity processing failed"
        );
        let headers = failure_alert(state.app_name(), &alert.entity_name, &alert.error_key);
        response.headers_mut().extend(headers);
    }

    response
}
