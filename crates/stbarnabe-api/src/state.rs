//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use stbarnabe_core::config::AppConfig;
use stbarnabe_database::DatabasePool;
use stbarnabe_service::{EmployeService, VersementService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL pool, absent with the in-memory store
    pub db_pool: Option<DatabasePool>,
    /// Versement service
    pub versement_service: Arc<VersementService>,
    /// Employe service
    pub employe_service: Arc<EmployeService>,
}

impl AppState {
    /// Application name used in alert headers.
    pub fn app_name(&self) -> &str {
        &self.config.application.name
    }
}
