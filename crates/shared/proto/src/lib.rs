//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated `users.v1` service definitions plus the
//! request validation bound to them.

pub mod validation;

/// Versioned user service definitions.
pub mod users {
    pub mod v1 {
        tonic::include_proto!("users.v1");
    }
}

use chrono::{DateTime, Utc};

// Re-export commonly used items
pub use users::v1::users_service_client::UsersServiceClient;
pub use users::v1::users_service_server::{UsersService, UsersServiceServer};

/// Convert a UTC instant to a protobuf timestamp.
pub fn timestamp(at: DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: at.timestamp(),
        nanos: at.timestamp_subsec_nanos() as i32,
    }
}

impl From<domain::User> for users::v1::User {
    fn from(user: domain::User) -> Self {
        Self {
            id: user.id.to_string(),
            created_at: Some(timestamp(user.created_at)),
            updated_at: Some(timestamp(user.updated_at)),
            username: user.username,
        }
    }
}
