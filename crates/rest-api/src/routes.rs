//! Route configuration.

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info_span;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use common::REQUEST_ID_HEADER;

use crate::handlers::{actuator_routes, user_routes};
use crate::middleware::{panic_response, problem_details_middleware, request_metrics_middleware};
use crate::observability::metrics_handler;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Request ids in UUID simple format (32 hex digits, no dashes).
#[derive(Clone, Copy, Default)]
pub struct MakeRequestSimpleUuid;

impl MakeRequestId for MakeRequestSimpleUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().simple().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Create the main router with all routes and the request pipeline.
pub fn create_router(state: AppState) -> Router {
    let timeout = state.config.request_timeout();

    Router::new()
        .nest("/api/v1", user_routes())
        .nest("/actuators", actuator_routes())
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(request_metrics_middleware))
        // OpenAPI document at /api/docs, browsable under /swagger-ui
        .merge(SwaggerUi::new("/swagger-ui").url("/api/docs", ApiDoc::openapi()))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestSimpleUuid))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default();
                    info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                }))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::from_fn(problem_details_middleware))
                .layer(CatchPanicLayer::custom(panic_response))
                .layer(TimeoutLayer::new(timeout)),
        )
}
