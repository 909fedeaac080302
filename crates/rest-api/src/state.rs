//! Application state for dependency injection.

use std::sync::Arc;

use common::ServerConfig;
use user_service_lib::infra::Database;
use user_service_lib::service::UserService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub database: Database,
    pub config: ServerConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(users: Arc<dyn UserService>, database: Database, config: ServerConfig) -> Self {
        Self {
            users,
            database,
            config,
        }
    }
}
