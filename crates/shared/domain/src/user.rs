//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{FIELD_PASSWORD, FIELD_USERNAME};
use crate::validation::{validate_password, validate_username, FieldViolations};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub username: String,
}

/// User creation command.
///
/// The password is only ever held in clear form here; it is consumed by
/// hashing and never stored.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

// Don't expose the password in debug output
impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check every creation rule, collecting all violations.
    pub fn validate(&self) -> Result<(), FieldViolations> {
        let mut violations = FieldViolations::new();
        if let Err(e) = validate_username(&self.username) {
            violations.add(FIELD_USERNAME, e.to_string());
        }
        if let Err(e) = validate_password(&self.password) {
            violations.add(FIELD_PASSWORD, e.to_string());
        }
        violations.into_result()
    }
}

/// Row to persist for a freshly created user.
///
/// Both timestamps are set from the same `now`.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub now: DateTime<Utc>,
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .field("now", &self.now)
            .finish()
    }
}
