//! UUID path parameter extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use common::AppError;

/// Name of the user id path parameter, as reported in errors.
pub const USER_ID_PARAM: &str = "userId";

/// Extractor for the `{userId}` path parameter.
///
/// A malformed value is rejected as an invalid parameter naming `userId`.
pub struct UserIdPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::invalid_parameter(USER_ID_PARAM, e.body_text()))?;

        Uuid::parse_str(&raw)
            .map(UserIdPath)
            .map_err(|e| AppError::invalid_parameter(USER_ID_PARAM, e.to_string()))
    }
}
