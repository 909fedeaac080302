//! Per-route request metrics.

use std::time::Instant;

use axum::{
    body::{Body, HttpBody},
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use metrics::{counter, gauge, histogram};

use crate::observability::{
    HTTP_REQUESTS_IN_FLIGHT, HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION, HTTP_RESPONSE_SIZE,
};

// Decrements on drop, so cancelled and panicking requests leave the gauge too.
struct InFlight {
    path: String,
}

impl InFlight {
    fn enter(path: &str) -> Self {
        gauge!(HTTP_REQUESTS_IN_FLIGHT, "path" => path.to_string()).increment(1.0);
        Self {
            path: path.to_string(),
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        gauge!(HTTP_REQUESTS_IN_FLIGHT, "path" => self.path.clone()).decrement(1.0);
    }
}

/// Records request count, duration, in-flight requests and response size.
///
/// Installed as a route layer so `path` is the route template
/// (`/api/v1/users/:userId`), never the raw URI.
pub async fn request_metrics_middleware(
    matched_path: Option<MatchedPath>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = matched_path
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let in_flight = InFlight::enter(&path);
    let response = next.run(request).await;
    drop(in_flight);

    let status = response.status().as_u16().to_string();
    counter!(
        HTTP_REQUESTS_TOTAL,
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status
    )
    .increment(1);

    histogram!(
        HTTP_REQUEST_DURATION,
        "method" => method.clone(),
        "path" => path.clone()
    )
    .record(start.elapsed().as_secs_f64());

    if let Some(size) = response.body().size_hint().exact() {
        histogram!(HTTP_RESPONSE_SIZE, "method" => method, "path" => path).record(size as f64);
    }

    response
}
