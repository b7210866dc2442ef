//! # stbarnabe-api
//!
//! HTTP API layer for St-Barnabe built on Axum.
//!
//! Provides the REST resources, the JHipster-style header conventions
//! (pagination links, entity alerts), request extractors, middleware,
//! and the central translation of `AppError` into problem responses.

pub mod app;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod headers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
