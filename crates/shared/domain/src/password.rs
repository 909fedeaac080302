//! One-way secret hashing.
//!
//! The user service only depends on the `SecretHasher` capability; `Argon2Hasher`
//! is the production implementation.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use thiserror::Error;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Hashing failure. Carries the library message, never the secret.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("password hash failed: {0}")]
pub struct HashError(pub String);

/// Turns a clear secret into a storable digest.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait SecretHasher: Send + Sync {
    /// Hash `secret` with a fresh random salt.
    fn hash(&self, secret: &str) -> Result<String, HashError>;
}

/// Argon2id with the library's default parameters, PHC string output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl SecretHasher for Argon2Hasher {
    fn hash(&self, secret: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| HashError(e.to_string()))?;
        Ok(hash.to_string())
    }
}
