//! Common utilities shared across the REST API and the user service.
//!
//! This crate provides:
//! - Unified error handling for HTTP (problem documents) and gRPC
//! - The per-request context (correlation id + parent span)
//! - Configuration structures

pub mod config;
pub mod context;
pub mod error;
pub mod problem;

pub use config::{DatabaseConfig, ServerConfig};
pub use context::{RequestContext, REQUEST_ID_HEADER};
pub use error::{AppError, AppResult};
pub use problem::{FieldProblem, ProblemDetails, PROBLEM_JSON};
