//! Unified error handling for HTTP and gRPC.
//!
//! Provides a single error type that can be converted to:
//! - Axum HTTP responses rendered as problem documents (REST API)
//! - Tonic gRPC status codes (user service)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{ErrorKind, FieldViolations};
use thiserror::Error;
use tonic::{metadata::MetadataValue, Status};

use crate::context::{RequestContext, REQUEST_ID_HEADER};
use crate::problem::{FieldProblem, ProblemDetails};

/// Application error types with support for both HTTP and gRPC.
#[derive(Error, Debug)]
pub enum AppError {
    // Client errors
    #[error("Validation error: {0}")]
    Validation(FieldViolations),

    #[error("No {entity} found with id: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("{name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Closed classification every adapter matches on.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::NotFound { .. } => ErrorKind::NotFound,
            AppError::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            #[cfg(feature = "database")]
            AppError::Database(_) => ErrorKind::Internal,
            AppError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation | ErrorKind::InvalidParameter => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get gRPC status code
    pub fn grpc_code(&self) -> tonic::Code {
        match self.kind() {
            ErrorKind::Validation | ErrorKind::InvalidParameter => tonic::Code::InvalidArgument,
            ErrorKind::NotFound => tonic::Code::NotFound,
            ErrorKind::Internal => tonic::Code::Internal,
        }
    }

    /// Problem type identifier
    pub fn problem_type(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Validation => "ValidationError",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::InvalidParameter => "InvalidParameterValue",
            ErrorKind::Internal => "InternalServerError",
        }
    }

    pub fn title(&self) -> String {
        match self {
            AppError::Validation(_) => "Validation Error".to_string(),
            AppError::NotFound { entity, .. } => format!("{} not found", entity),
            AppError::InvalidParameter { .. } => "Invalid Parameter Value".to_string(),
            _ => "Internal Server Error".to_string(),
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(violations) => violations.to_string(),
            AppError::NotFound { .. } | AppError::InvalidParameter { .. } => self.to_string(),

            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }

    /// Render as a problem document. `instance` is left empty for the
    /// boundary to fill in.
    pub fn to_problem(&self) -> ProblemDetails {
        let detail = match self {
            AppError::Validation(_) => "Validation Error".to_string(),
            _ => self.user_message(),
        };
        let problem = ProblemDetails::new(self.problem_type(), self.title(), detail, self.status());

        match self {
            AppError::Validation(violations) => problem.with_errors(
                violations
                    .iter()
                    .flat_map(|(field, messages)| {
                        messages.iter().map(move |message| FieldProblem {
                            detail: message.clone(),
                            pointer: field.to_string(),
                        })
                    })
                    .collect(),
            ),
            _ => problem,
        }
    }

    /// Convert to a gRPC status carrying the correlation id.
    pub fn into_status(self, ctx: &RequestContext) -> Status {
        let mut status = Status::from(self);
        if let Ok(value) = MetadataValue::try_from(ctx.request_id()) {
            status.metadata_mut().insert(REQUEST_ID_HEADER, value);
        }
        status
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_problem().into_response()
    }
}

// =============================================================================
// gRPC Status (Tonic)
// =============================================================================

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        Status::new(err.grpc_code(), err.user_message())
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<FieldViolations> for AppError {
    fn from(violations: FieldViolations) -> Self {
        AppError::Validation(violations)
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        AppError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
