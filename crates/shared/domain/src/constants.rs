//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Users
// =============================================================================

/// Minimum username length (inclusive)
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length (inclusive)
pub const MAX_USERNAME_LENGTH: usize = 32;

/// Minimum password length requirement (inclusive)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (inclusive)
pub const MAX_PASSWORD_LENGTH: usize = 64;

// =============================================================================
// Pagination
// =============================================================================

/// Default page index when the client does not send one (0-indexed)
pub const DEFAULT_PAGE_NUMBER: i32 = 0;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: i32 = 20;

// =============================================================================
// Field names
// =============================================================================

pub const FIELD_USERNAME: &str = "username";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_PAGE: &str = "page";
pub const FIELD_SIZE: &str = "size";
