//! Combined binary - serves REST and gRPC from one process.
//!
//! Both listeners share a single connection pool and user service.

use std::error::Error;
use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rest_api_lib::state::AppState;
use user_service_lib::config::UserServiceConfig;
use user_service_lib::infra::Database;
use user_service_lib::{build_user_service, serve_grpc, shutdown_signal};

#[derive(Parser)]
#[command(name = "web-layout")]
#[command(about = "User service over REST and gRPC")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve both protocols until Ctrl-C
    Serve {
        #[arg(long, env = "GRPC_SERVE_ADDRESS", default_value = "0.0.0.0:3002")]
        grpc_address: String,
        #[arg(long, env = "HTTP_SERVE_ADDRESS", default_value = "0.0.0.0:3001")]
        http_address: String,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            grpc_address,
            http_address,
        } => {
            serve(grpc_address.parse()?, http_address.parse()?).await?;
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateAction::Up => user_service_lib::MigrateAction::Up,
                MigrateAction::Down => user_service_lib::MigrateAction::Down,
                MigrateAction::Status => user_service_lib::MigrateAction::Status,
                MigrateAction::Fresh => user_service_lib::MigrateAction::Fresh,
            };
            user_service_lib::run_migrations(migrate_action).await?;
        }
    }

    Ok(())
}

async fn serve(grpc_addr: SocketAddr, http_addr: SocketAddr) -> Result<(), Box<dyn Error>> {
    let config = UserServiceConfig::from_env();
    let db = Database::connect(&config.database).await?;
    let users = build_user_service(&db);
    let timeout = config.server.request_timeout();

    info!("Starting combined services");
    info!("  REST: http://{}", http_addr);
    info!("  gRPC: http://{}", grpc_addr);

    // Dropping or signalling the sender stops both listeners.
    let (stop_tx, stop_rx) = watch::channel(());
    let stopped = |mut rx: watch::Receiver<()>| async move {
        let _ = rx.changed().await;
    };

    let grpc = {
        let users = users.clone();
        let shutdown = stopped(stop_rx.clone());
        async move {
            serve_grpc(grpc_addr, users, timeout, shutdown)
                .await
                .map_err(Box::<dyn Error>::from)
        }
    };
    let rest = {
        let state = AppState::new(users, db, config.server);
        let shutdown = stopped(stop_rx);
        async move {
            rest_api_lib::serve(http_addr, state, shutdown)
                .await
                .map_err(Box::<dyn Error>::from)
        }
    };

    let servers = async { tokio::try_join!(grpc, rest) };
    tokio::pin!(servers);

    let result = tokio::select! {
        result = &mut servers => result,
        _ = shutdown_signal() => {
            let _ = stop_tx.send(());
            servers.await
        }
    };

    if let Err(e) = &result {
        error!("Server failed: {}", e);
    }
    result?;

    info!("All listeners stopped");
    Ok(())
}
