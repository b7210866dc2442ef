//! Application-level conventions shared by every resource.

use serde::{Deserialize, Serialize};

/// Settings that shape response headers and paging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name used in alert headers (`X-{name}-alert`).
    #[serde(default = "default_name")]
    pub name: String,
    /// Paging defaults.
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            pagination: PaginationConfig::default(),
        }
    }
}

/// Page size defaults for list endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size when the request carries none.
    #[serde(default = "default_size")]
    pub default_size: u64,
    /// Upper bound for a requested page size.
    #[serde(default = "default_max_size")]
    pub max_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_size: default_size(),
            max_size: default_max_size(),
        }
    }
}

fn default_name() -> String {
    "stBarnabeApp".to_string()
}

fn default_size() -> u64 {
    20
}

fn default_max_size() -> u64 {
    2000
}
