//! Page request query extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use common::AppError;
use domain::validation::validate_page_request;
use domain::{PageRequest, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, FIELD_PAGE, FIELD_SIZE};

#[derive(Debug, Default, Deserialize)]
struct RawPageParams {
    page: Option<String>,
    size: Option<String>,
}

/// Extracts `?page=&size=` into a validated `PageRequest`.
///
/// Missing values take their defaults. A value that is not an integer is an
/// invalid parameter; negative values are reported together as validation
/// errors.
#[derive(Debug, Clone, Copy)]
pub struct PageQuery(pub PageRequest);

fn parse_param(name: &str, raw: Option<&str>, default: i32) -> Result<i32, AppError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<i32>()
            .map_err(|e| AppError::invalid_parameter(name, e.to_string())),
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawPageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::invalid_parameter("query", e.body_text()))?;

        let page = parse_param(FIELD_PAGE, raw.page.as_deref(), DEFAULT_PAGE_NUMBER)?;
        let size = parse_param(FIELD_SIZE, raw.size.as_deref(), DEFAULT_PAGE_SIZE)?;

        Ok(PageQuery(validate_page_request(page, size)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param_defaults() {
        assert_eq!(parse_param("page", None, 0).unwrap(), 0);
        assert_eq!(parse_param("size", Some("15"), 20).unwrap(), 15);
    }

    #[test]
    fn test_parse_param_names_parameter() {
        let err = parse_param("size", Some("ten"), 20).unwrap_err();
        assert!(matches!(err, AppError::InvalidParameter { ref name, .. } if name == "size"));
    }
}
