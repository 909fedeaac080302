//! HTTP handlers.

pub mod actuator_handler;
pub mod user_handler;

pub use actuator_handler::actuator_routes;
pub use user_handler::user_routes;
