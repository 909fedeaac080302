//! User service - Handles user-related business logic.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use common::{AppError, AppResult, RequestContext};
use domain::{NewUser, Page, PageRequest, SecretHasher, User, UserRecord};

use crate::repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
///
/// Every operation takes the caller's `RequestContext`; its span parents the
/// operation span.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate, hash the password and store a new user.
    async fn create(&self, ctx: &RequestContext, new_user: NewUser) -> AppResult<User>;

    /// Get user by ID
    async fn get_by_id(&self, ctx: &RequestContext, id: Uuid) -> AppResult<User>;

    /// One page of users in store order
    async fn get_all(&self, ctx: &RequestContext, page_request: PageRequest)
        -> AppResult<Page<User>>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn SecretHasher>,
}

impl UserManager {
    /// Create new user service instance with repository and hasher
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<dyn SecretHasher>) -> Self {
        Self { repo, hasher }
    }

    /// Argon2 is CPU bound; keep it off the async workers.
    async fn hash_password(&self, password: String) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let digest = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::internal(format!("hashing task failed: {}", e)))?
            .map_err(|e| AppError::internal(e.to_string()))?;
        Ok(digest)
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create(&self, ctx: &RequestContext, new_user: NewUser) -> AppResult<User> {
        let span = info_span!(
            parent: ctx.span(),
            "user_service.create",
            request_id = %ctx.request_id(),
            username = %new_user.username,
        );

        async move {
            new_user.validate()?;

            let NewUser { username, password } = new_user;
            let password_hash = self.hash_password(password).await?;

            let record = UserRecord {
                id: Uuid::new_v4(),
                username,
                password_hash,
                now: Utc::now(),
            };

            let user = self.repo.insert(record).await.map_err(|e| {
                warn!(error = %e, "failed to insert user");
                e
            })?;

            info!(user_id = %user.id, "User created");
            Ok(user)
        }
        .instrument(span)
        .await
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: Uuid) -> AppResult<User> {
        let span = info_span!(
            parent: ctx.span(),
            "user_service.get_by_id",
            request_id = %ctx.request_id(),
            user_id = %id,
        );

        async move {
            self.repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::not_found("User", id))
        }
        .instrument(span)
        .await
    }

    async fn get_all(
        &self,
        ctx: &RequestContext,
        page_request: PageRequest,
    ) -> AppResult<Page<User>> {
        let span = info_span!(
            parent: ctx.span(),
            "user_service.get_all",
            request_id = %ctx.request_id(),
            page = page_request.page(),
            size = page_request.size(),
        );

        async move {
            self.repo.find_page(page_request).await.map_err(|e| {
                warn!(error = %e, "failed to read users page");
                e
            })
        }
        .instrument(span)
        .await
    }
}
