//! CORS layer configuration.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use stbarnabe_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
///
/// Alert, pagination, and `Location` headers are exposed so browser
/// clients can read them.
pub fn build_cors_layer(config: &CorsConfig, app_name: &str) -> CorsLayer {
    let mut layer = CorsLayer::new();

    if config.allowed_origins.iter().any(|o| o == "*") {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    if config.allowed_headers.iter().any(|h| h == "*") {
        layer = layer.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        layer = layer.allow_headers(headers);
    }

    layer
        .expose_headers(exposed_headers(app_name))
        .max_age(std::time::Duration::from_secs(config.max_age_seconds))
}

/// Response headers browser clients may read: paging, location, and the
/// entity alert headers of `app_name`.
pub fn exposed_headers(app_name: &str) -> Vec<HeaderName> {
    [
        "Link".to_string(),
        "Location".to_string(),
        "X-Total-Count".to_string(),
        format!("X-{app_name}-alert"),
        format!("X-{app_name}-error"),
        format!("X-{app_name}-params"),
    ]
    .iter()
    .filter_map(|h| h.parse().ok())
    .collect()
}
