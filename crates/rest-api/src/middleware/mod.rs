//! Router middleware.

mod catch_panic;
mod problem_details;
mod request_metrics;

pub use catch_panic::panic_response;
pub use problem_details::problem_details_middleware;
pub use request_metrics::request_metrics_middleware;
