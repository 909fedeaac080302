//! User Service Library
//!
//! This crate provides user management over gRPC plus the service and store
//! layers the REST API reuses. It can be run as a standalone service or
//! embedded in the combined binary.

pub mod config;
pub mod grpc;
pub mod infra;
pub mod repository;
pub mod service;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tonic::transport::Server;
use tracing::info;

use domain::Argon2Hasher;
use proto::UsersServiceServer;

use crate::config::UserServiceConfig;
use crate::grpc::{request_id_interceptor, UserGrpcService};
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Wire the store and hasher into a shareable service.
pub fn build_user_service(db: &Database) -> Arc<dyn UserService> {
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    Arc::new(UserManager::new(user_repo, Arc::new(Argon2Hasher::new())))
}

/// Run the user service standalone (gRPC only) until Ctrl-C.
pub async fn run_embedded(address: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env();
    let db = Database::connect(&config.database).await?;
    let service = build_user_service(&db);

    let addr: SocketAddr = address.parse()?;
    serve_grpc(
        addr,
        service,
        config.server.request_timeout(),
        shutdown_signal(),
    )
    .await?;

    Ok(())
}

/// Serve `users.v1.UsersService` on `addr` until `shutdown` resolves.
pub async fn serve_grpc<F>(
    addr: SocketAddr,
    service: Arc<dyn UserService>,
    timeout: Duration,
    shutdown: F,
) -> Result<(), tonic::transport::Error>
where
    F: Future<Output = ()>,
{
    let grpc_service = UserGrpcService::new(service);
    info!("User service listening on {}", addr);

    Server::builder()
        .timeout(timeout)
        .add_service(UsersServiceServer::with_interceptor(
            grpc_service,
            request_id_interceptor,
        ))
        .serve_with_shutdown(addr, shutdown)
        .await
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
