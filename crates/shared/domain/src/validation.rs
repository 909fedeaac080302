//! Validation rules shared by every protocol adapter and the user service.
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::constants::{
    FIELD_PAGE, FIELD_SIZE, MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH,
    MIN_USERNAME_LENGTH,
};
use crate::pagination::{PageRequest, PaginationError};

/// Username rule violations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsernameError {
    #[error("value length must be at least {} characters", MIN_USERNAME_LENGTH)]
    TooShort,

    #[error("value length must be at most {} characters", MAX_USERNAME_LENGTH)]
    TooLong,
}

/// Password rule violations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    #[error("value length must be at least {} characters", MIN_PASSWORD_LENGTH)]
    TooShort,

    #[error("value length must be at most {} characters", MAX_PASSWORD_LENGTH)]
    TooLong,
}

impl UsernameError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            UsernameError::TooShort => "username_too_short",
            UsernameError::TooLong => "username_too_long",
        }
    }
}

impl PasswordError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            PasswordError::TooShort => "password_too_short",
            PasswordError::TooLong => "password_too_long",
        }
    }
}

pub fn validate_username(username: &str) -> Result<(), UsernameError> {
    let len = username.chars().count();
    if len < MIN_USERNAME_LENGTH {
        return Err(UsernameError::TooShort);
    }
    if len > MAX_USERNAME_LENGTH {
        return Err(UsernameError::TooLong);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort);
    }
    if len > MAX_PASSWORD_LENGTH {
        return Err(PasswordError::TooLong);
    }
    Ok(())
}

pub fn validate_page(page: i32) -> Result<(), PaginationError> {
    if page < 0 {
        return Err(PaginationError::PageMustBeNonNegative);
    }
    Ok(())
}

pub fn validate_size(size: i32) -> Result<(), PaginationError> {
    if size < 0 {
        return Err(PaginationError::SizeMustBeNonNegative);
    }
    Ok(())
}

/// Check page and size independently and report every offending field.
pub fn validate_page_request(page: i32, size: i32) -> Result<PageRequest, FieldViolations> {
    let mut violations = FieldViolations::new();
    if let Err(e) = validate_page(page) {
        violations.add(FIELD_PAGE, e.to_string());
    }
    if let Err(e) = validate_size(size) {
        violations.add(FIELD_SIZE, e.to_string());
    }
    violations.into_result()?;

    // Both checks passed, so construction cannot fail.
    PageRequest::new(page, size).map_err(|e| FieldViolations::single(FIELD_PAGE, e.to_string()))
}

/// Field name -> human readable violations, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldViolations(BTreeMap<String, Vec<String>>);

impl FieldViolations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut violations = Self::new();
        violations.add(field, message);
        violations
    }

    /// Record one more violation for `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Iterate `(field, messages)` in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), FieldViolations> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_bounds() {
        assert_eq!(validate_username("ab"), Err(UsernameError::TooShort));
        assert_eq!(validate_username("abc"), Ok(()));
        assert_eq!(validate_username(&"a".repeat(32)), Ok(()));
        assert_eq!(validate_username(&"a".repeat(33)), Err(UsernameError::TooLong));
        assert_eq!(validate_username(""), Err(UsernameError::TooShort));
    }

    #[test]
    fn test_username_counts_characters() {
        // 3 characters, 6 bytes
        assert_eq!(validate_username("ééé"), Ok(()));
        // 32 characters, 64 bytes
        assert_eq!(validate_username(&"é".repeat(32)), Ok(()));
    }

    #[test]
    fn test_password_bounds() {
        assert_eq!(validate_password("1234567"), Err(PasswordError::TooShort));
        assert_eq!(validate_password("12345678"), Ok(()));
        assert_eq!(validate_password(&"a".repeat(64)), Ok(()));
        assert_eq!(validate_password(&"a".repeat(65)), Err(PasswordError::TooLong));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            UsernameError::TooLong.to_string(),
            "value length must be at most 32 characters"
        );
        assert_eq!(
            PasswordError::TooShort.to_string(),
            "value length must be at least 8 characters"
        );
    }

    #[test]
    fn test_page_request_reports_only_invalid_field() {
        let err = validate_page_request(-1, 20).unwrap_err();
        assert!(err.contains("page"));
        assert!(!err.contains("size"));

        let err = validate_page_request(0, -5).unwrap_err();
        assert!(!err.contains("page"));
        assert_eq!(
            err.get("size"),
            Some(&["size must be greater or equal than 0".to_string()][..])
        );
    }

    #[test]
    fn test_page_request_reports_both_fields() {
        let err = validate_page_request(-1, -1).unwrap_err();
        assert_eq!(err.len(), 2);
        assert!(err.contains("page"));
        assert!(err.contains("size"));
    }

    #[test]
    fn test_page_request_valid() {
        let pr = validate_page_request(2, 10).unwrap();
        assert_eq!(pr.offset(), 20);
    }

    #[test]
    fn test_violations_display() {
        let mut violations = FieldViolations::new();
        violations.add("username", "too short");
        violations.add("password", "too long");
        violations.add("password", "too weak");
        assert_eq!(
            violations.to_string(),
            "password: too long; password: too weak; username: too short"
        );
    }
}
