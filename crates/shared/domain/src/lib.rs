//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! pagination arithmetic, the validation rules shared by the REST and gRPC
//! adapters, the user entity and the secret hashing capability.

pub mod constants;
pub mod error;
pub mod pagination;
pub mod password;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::ErrorKind;
pub use pagination::{Page, PageRequest, PaginationError};
pub use password::{Argon2Hasher, HashError, SecretHasher};
pub use user::{NewUser, User, UserRecord};
pub use validation::{FieldViolations, PasswordError, UsernameError};

#[cfg(any(test, feature = "test-utils"))]
pub use password::MockSecretHasher;
