//! `validator` adapters over the shared domain rules.
//!
//! Bound to the generated request messages through `#[validate(custom(...))]`
//! attributes emitted by `build.rs`.

use std::borrow::Cow;

use domain::validation::{validate_password, validate_username};
use domain::FieldViolations;
use validator::{ValidationError, ValidationErrors};

pub fn username(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(required());
    }
    validate_username(value).map_err(|e| rule(e.code(), e.to_string()))
}

pub fn password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(required());
    }
    validate_password(value).map_err(|e| rule(e.code(), e.to_string()))
}

/// Flatten `validator` output into the shared violation map.
pub fn violations(errors: &ValidationErrors) -> FieldViolations {
    let mut violations = FieldViolations::new();
    for (field, errs) in errors.field_errors() {
        for err in errs.iter() {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string());
            violations.add(field.to_string(), message);
        }
    }
    violations
}

fn required() -> ValidationError {
    rule("required", "value is required".to_string())
}

fn rule(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::v1::CreateUserRequest;
    use validator::Validate;

    fn request(username: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("John", "12345678").validate().is_ok());
    }

    #[test]
    fn test_empty_fields_are_required() {
        let errors = request("", "").validate().unwrap_err();
        let violations = violations(&errors);
        assert_eq!(
            violations.get("username"),
            Some(&["value is required".to_string()][..])
        );
        assert_eq!(
            violations.get("password"),
            Some(&["value is required".to_string()][..])
        );
    }

    #[test]
    fn test_username_too_long() {
        let errors = request(&"a".repeat(600), "MyPassword").validate().unwrap_err();
        assert_eq!(
            violations(&errors).to_string(),
            "username: value length must be at most 32 characters"
        );
    }

    #[test]
    fn test_password_bounds() {
        let errors = request("MyUsername", "a").validate().unwrap_err();
        assert_eq!(
            violations(&errors).to_string(),
            "password: value length must be at least 8 characters"
        );

        let errors = request("MyUsername", &"a".repeat(600)).validate().unwrap_err();
        assert_eq!(
            violations(&errors).to_string(),
            "password: value length must be at most 64 characters"
        );
    }
}
