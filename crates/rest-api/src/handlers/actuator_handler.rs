//! Actuator handlers: health and build info.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

use crate::resources::{
    AppInfo, ComponentHealth, GitInfo, HealthComponents, HealthResource, InfoResource,
};
use crate::state::AppState;

const STATUS_UP: &str = "UP";
const STATUS_DOWN: &str = "DOWN";

/// Create actuator routes
pub fn actuator_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
}

/// Health check - verifies database connectivity.
#[utoipa::path(
    get,
    path = "/actuators/health",
    tag = "Actuators",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResource),
        (status = 503, description = "A component is down", body = HealthResource)
    )
)]
pub async fn health(State(state): State<AppState>) -> Response {
    let db_up = match state.database.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
    };

    let status = if db_up { STATUS_UP } else { STATUS_DOWN };
    let response = HealthResource {
        status: status.to_string(),
        components: HealthComponents {
            db: ComponentHealth {
                status: status.to_string(),
            },
        },
    };

    if db_up {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}

/// Build and runtime information.
#[utoipa::path(
    get,
    path = "/actuators/info",
    tag = "Actuators",
    responses(
        (status = 200, description = "Application info", body = InfoResource)
    )
)]
pub async fn info(State(state): State<AppState>) -> Json<InfoResource> {
    Json(InfoResource {
        app: AppInfo {
            name: "web-layout".to_string(),
            description: "Example of web project layout".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: state.config.environment.clone(),
            server_id: state.config.server_id.clone(),
        },
        git: GitInfo {
            branch: option_env!("GIT_BRANCH").unwrap_or_default().to_string(),
            build_time: option_env!("BUILD_TIME").unwrap_or_default().to_string(),
            build_url: option_env!("BUILD_URL").unwrap_or_default().to_string(),
            commit_id: option_env!("GIT_COMMIT").unwrap_or_default().to_string(),
        },
    })
}
