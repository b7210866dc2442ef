//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod application;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::application::{ApplicationConfig, PaginationConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Prefix of environment variables overriding file settings.
pub const ENV_PREFIX: &str = "STBARNABE";

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// files (default.toml + environment overlay + `STBARNABE__*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Entity store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Application-level conventions (alert header name, paging).
    #[serde(default)]
    pub application: ApplicationConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `dir`.
    ///
    /// Merges `{dir}/default.toml` with the `{dir}/{env}.toml` overlay and
    /// environment variables such as `STBARNABE__SERVER__PORT`.
    pub fn load(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Configuration backed by the in-memory store, for tests and demos.
    pub fn in_memory() -> Self {
        Self {
            database: DatabaseConfig {
                provider: database::PROVIDER_MEMORY.to_string(),
                ..DatabaseConfig::default()
            },
            ..Self::default()
        }
    }
}
