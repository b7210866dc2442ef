//! Route definitions for the St-Barnabe HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::get,
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the alert/logging middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    let api_routes = Router::new()
        .merge(versement_routes())
        .merge(employe_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::alert::failure_alert_headers,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Versement CRUD
fn versement_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/versements",
            get(handlers::versement::get_all_versements)
                .post(handlers::versement::create_versement)
                .put(handlers::versement::update_versement),
        )
        .route(
            "/versements/{id}",
            get(handlers::versement::get_versement)
                .delete(handlers::versement::delete_versement),
        )
}

/// Employe CRUD
fn employe_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employes",
            get(handlers::employe::get_all_employes)
                .post(handlers::employe::create_employe)
                .put(handlers::employe::update_employe),
        )
        .route(
            "/employes/{id}",
            get(handlers::employe::get_employe).delete(handlers::employe::delete_employe),
        )
}

/// Health probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
