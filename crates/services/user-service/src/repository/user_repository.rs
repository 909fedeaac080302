//! User repository implementation on SeaORM.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait,
    IsolationLevel, PaginatorTrait, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{Page, PageRequest, User, UserRecord};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a freshly created user
    async fn insert(&self, record: UserRecord) -> AppResult<User>;

    /// One page of users plus the collection total, read in a single
    /// transaction so both describe the same snapshot.
    async fn find_page(&self, page_request: PageRequest) -> AppResult<Page<User>>;

    /// Find user by ID; `None` when no row matches
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Isolation settings for the page snapshot. SQLite transactions are
    /// already serializable and reject both options.
    fn snapshot_config(&self) -> (Option<IsolationLevel>, Option<AccessMode>) {
        match self.db.get_database_backend() {
            DatabaseBackend::Sqlite => (None, None),
            _ => (
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            ),
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn insert(&self, record: UserRecord) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(record.id),
            username: Set(record.username),
            password: Set(record.password_hash),
            created_at: Set(record.now),
            updated_at: Set(record.now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn find_page(&self, page_request: PageRequest) -> AppResult<Page<User>> {
        let (isolation, access) = self.snapshot_config();
        // Dropping the transaction on any early return rolls it back.
        let txn = self
            .db
            .begin_with_config(isolation, access)
            .await
            .map_err(AppError::from)?;

        let models = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .order_by_asc(user::Column::Id)
            .limit(page_request.limit())
            .offset(page_request.offset() as u64)
            .all(&txn)
            .await
            .map_err(AppError::from)?;

        let total = UserEntity::find()
            .count(&txn)
            .await
            .map_err(AppError::from)?;

        txn.commit().await.map_err(AppError::from)?;

        let content = models.into_iter().map(User::from).collect();
        let total_elements = i64::try_from(total)
            .map_err(|_| AppError::internal(format!("user count out of range: {}", total)))?;

        Page::new(content, page_request, total_elements)
            .map_err(|e| AppError::internal(e.to_string()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }
}
