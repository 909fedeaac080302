//! Problem document boundary.
//!
//! Every error response leaves the router as `application/problem+json` with
//! `instance` set to the request's correlation id.

use axum::{
    body::Body,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use common::{ProblemDetails, RequestContext, PROBLEM_JSON, REQUEST_ID_HEADER};

pub async fn problem_details_middleware(request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| RequestContext::default().request_id().to_owned());

    let response = next.run(request).await;
    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let problem = match response.extensions().get::<ProblemDetails>() {
        Some(problem) => problem.clone(),
        // Already a problem document produced elsewhere; leave it alone.
        None if is_problem_json(&response) => return response,
        // Framework rejections (unknown route, timeout, ...)
        None => {
            let reason = status.canonical_reason().unwrap_or("Error");
            ProblemDetails::new(reason.replace(' ', ""), reason, reason, status)
        }
    };

    let (mut parts, _) = response.into_parts();
    let rendered = problem.with_instance(request_id).into_response();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.extend(rendered.headers().clone());
    Response::from_parts(parts, rendered.into_body())
}

fn is_problem_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with(PROBLEM_JSON))
}
