//! REST API Library
//!
//! This crate exposes the user service over HTTP: the `/api/v1/users`
//! resources, actuators and the OpenAPI document.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod openapi;
pub mod resources;
pub mod routes;
pub mod state;

use std::future::Future;
use std::net::SocketAddr;

use tracing::{info, warn};

use user_service_lib::infra::Database;
use user_service_lib::{build_user_service, shutdown_signal};

use crate::config::RestApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the REST API standalone until Ctrl-C.
pub async fn run_embedded(address: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = RestApiConfig::from_env();
    let db = Database::connect(&config.database).await?;
    let state = AppState::new(build_user_service(&db), db, config.server);

    let addr: SocketAddr = address.parse()?;
    serve(addr, state, shutdown_signal()).await?;

    Ok(())
}

/// Serve the router on `addr` until `shutdown` resolves.
pub async fn serve<F>(addr: SocketAddr, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Err(e) = observability::init_metrics() {
        warn!("Metrics recorder not installed: {}", e);
    }
    let app = create_router(state);

    info!("REST API listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
