//! St-Barnabe Server: payroll records REST backend
//!
//! Main entry point: loads configuration, initializes logging, and hands
//! off to the API crate which wires the store, services, and router.

use tracing_subscriber::{EnvFilter, fmt};

use stbarnabe_core::config::AppConfig;
use stbarnabe_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = stbarnabe_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from the config directory and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_dir =
        std::env::var("STBARNABE_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let env = std::env::var("STBARNABE_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&config_dir, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }

    tracing::info!(
        provider = %config.database.provider,
        app = %config.application.name,
        "Configuration loaded"
    );
}
