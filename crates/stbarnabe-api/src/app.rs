//! Application builder: wires the store, services, router, and
//! middleware into an Axum app and serves it.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use stbarnabe_core::config::AppConfig;
use stbarnabe_core::error::AppError;
use stbarnabe_database::repositories::{EmployeRepository, VersementRepository};
use stbarnabe_database::{DatabasePool, ForeignKey, InMemoryRepository};
use stbarnabe_entity::{Employe, Versement};
use stbarnabe_service::employe::service::EmployeStore;
use stbarnabe_service::versement::service::VersementStore;
use stbarnabe_service::{EmployeService, VersementService};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors, state.app_name());

    build_router(state)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Connects the configured store and builds the shared state.
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    let (db_pool, versement_store, employe_store): (
        Option<DatabasePool>,
        VersementStore,
        EmployeStore,
    ) = if config.database.is_memory() {
        tracing::info!("Using in-memory entity store");
        let (versements, employes) = in_memory_stores();
        (None, versements, employes)
    } else {
        let pool = DatabasePool::connect(&config.database).await?;
        if config.database.run_migrations {
            stbarnabe_database::migration::run_migrations(pool.pool()).await?;
        }
        let versements = Arc::new(VersementRepository::new(pool.pool().clone()));
        let employes = Arc::new(EmployeRepository::new(pool.pool().clone()));
        (Some(pool), versements, employes)
    };

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        versement_service: Arc::new(VersementService::new(versement_store)),
        employe_service: Arc::new(EmployeService::new(employe_store)),
    })
}

/// In-memory stores linked by `versement.employe_id`, with the same
/// reference rules as the SQL schema.
fn in_memory_stores() -> (VersementStore, EmployeStore) {
    let employes = Arc::new(InMemoryRepository::<Employe>::new());
    let versements = Arc::new(InMemoryRepository::<Versement>::new().with_foreign_key(
        ForeignKey::new(
            "employe_id",
            |v: &Versement| v.employe_id,
            |v: &mut Versement| v.employe_id = None,
            employes.clone(),
        ),
    ));
    employes.add_dependent(versements.clone());

    let versements: VersementStore = versements;
    let employes: EmployeStore = employes;
    (versements, employes)
}

/// Runs the server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting St-Barnabe v{}", env!("CARGO_PKG_VERSION"));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = build_state(config).await?;
    let db_pool = state.db_pool.clone();
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("St-Barnabe server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(pool) = db_pool {
        if tokio::time::timeout(grace, pool.close()).await.is_err() {
            tracing::warn!("Database pool did not close within the grace period");
        }
    }

    tracing::info!("St-Barnabe server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
