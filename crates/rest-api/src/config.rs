//! REST API configuration.

use common::{DatabaseConfig, ServerConfig};

/// REST API configuration.
#[derive(Debug, Clone, Default)]
pub struct RestApiConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl RestApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
            server: ServerConfig::from_env(),
        }
    }
}
