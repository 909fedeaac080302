//! User service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use tokio_test::{assert_err, assert_ok};
use uuid::Uuid;

use common::{AppError, RequestContext};
use domain::{ErrorKind, HashError, MockSecretHasher, NewUser, Page, PageRequest, User, UserRecord};
use user_service_lib::repository::MockUserRepository;
use user_service_lib::service::{UserManager, UserService};

fn user_from(record: &UserRecord) -> User {
    User {
        id: record.id,
        created_at: record.now,
        updated_at: record.now,
        username: record.username.clone(),
    }
}

fn create_test_user(id: Uuid) -> User {
    let now = Utc::now();
    User {
        id,
        created_at: now,
        updated_at: now,
        username: "John".to_string(),
    }
}

fn hasher_returning(digest: &'static str) -> MockSecretHasher {
    let mut hasher = MockSecretHasher::new();
    hasher
        .expect_hash()
        .returning(move |_| Ok(digest.to_string()));
    hasher
}

fn manager(repo: MockUserRepository, hasher: MockSecretHasher) -> UserManager {
    UserManager::new(Arc::new(repo), Arc::new(hasher))
}

#[tokio::test]
async fn test_create_user_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_insert()
        .withf(|record| {
            record.username == "John" && record.password_hash == "$argon2id$digest"
        })
        .times(1)
        .returning(|record| Ok(user_from(&record)));

    let service = manager(repo, hasher_returning("$argon2id$digest"));
    let user = assert_ok!(
        service
            .create(&RequestContext::default(), NewUser::new("John", "12345678"))
            .await
    );

    assert_eq!(user.username, "John");
    assert_eq!(user.created_at, user.updated_at);
}

#[tokio::test]
async fn test_create_user_generates_unique_ids() {
    let mut repo = MockUserRepository::new();
    repo.expect_insert()
        .times(2)
        .returning(|record| Ok(user_from(&record)));

    let service = manager(repo, hasher_returning("digest"));
    let ctx = RequestContext::default();

    let first = assert_ok!(service.create(&ctx, NewUser::new("John", "12345678")).await);
    let second = assert_ok!(service.create(&ctx, NewUser::new("John", "12345678")).await);

    assert_eq!(first.username, second.username);
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_create_user_invalid_never_touches_store() {
    let mut repo = MockUserRepository::new();
    repo.expect_insert().never();
    let mut hasher = MockSecretHasher::new();
    hasher.expect_hash().never();

    let service = manager(repo, hasher);
    let err = assert_err!(
        service
            .create(&RequestContext::default(), NewUser::new("ab", "short"))
            .await
    );

    match err {
        AppError::Validation(violations) => {
            assert!(violations.contains("username"));
            assert!(violations.contains("password"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_user_hash_failure_is_internal() {
    let mut repo = MockUserRepository::new();
    repo.expect_insert().never();
    let mut hasher = MockSecretHasher::new();
    hasher
        .expect_hash()
        .returning(|_| Err(HashError("out of memory".to_string())));

    let service = manager(repo, hasher);
    let err = assert_err!(
        service
            .create(&RequestContext::default(), NewUser::new("John", "12345678"))
            .await
    );
    assert_eq!(err.kind(), ErrorKind::Internal);
}

#[tokio::test]
async fn test_create_user_store_failure_keeps_kind() {
    let mut repo = MockUserRepository::new();
    repo.expect_insert()
        .returning(|_| Err(AppError::internal("connection reset")));

    let service = manager(repo, hasher_returning("digest"));
    let err = assert_err!(
        service
            .create(&RequestContext::default(), NewUser::new("John", "12345678"))
            .await
    );
    assert_eq!(err.kind(), ErrorKind::Internal);
}

#[tokio::test]
async fn test_get_by_id_success() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(user_id))
        .returning(|id| Ok(Some(create_test_user(id))));

    let service = manager(repo, MockSecretHasher::new());
    let user = assert_ok!(service.get_by_id(&RequestContext::default(), user_id).await);
    assert_eq!(user.id, user_id);
}

#[tokio::test]
async fn test_get_by_id_not_found() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = manager(repo, MockSecretHasher::new());
    let err = assert_err!(service.get_by_id(&RequestContext::default(), user_id).await);

    assert!(matches!(err, AppError::NotFound { entity: "User", .. }));
    assert_eq!(err.to_string(), format!("No User found with id: {}", user_id));
}

#[tokio::test]
async fn test_get_all_passes_page_through() {
    let page_request = PageRequest::new(1, 2).unwrap();

    let mut repo = MockUserRepository::new();
    repo.expect_find_page()
        .with(eq(page_request))
        .times(1)
        .returning(|pr| {
            Ok(Page::new(
                vec![create_test_user(Uuid::new_v4()), create_test_user(Uuid::new_v4())],
                pr,
                5,
            )
            .unwrap())
        });

    let service = manager(repo, MockSecretHasher::new());
    let page = assert_ok!(service.get_all(&RequestContext::default(), page_request).await);

    assert_eq!(page.number(), 1);
    assert_eq!(page.size(), 2);
    assert_eq!(page.content().len(), 2);
    assert_eq!(page.total_elements(), 5);
    assert_eq!(page.total_pages(), 3);
}

#[tokio::test]
async fn test_get_all_store_failure() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_page()
        .returning(|_| Err(AppError::internal("timeout")));

    let service = manager(repo, MockSecretHasher::new());
    let err = assert_err!(
        service
            .get_all(&RequestContext::default(), PageRequest::new(0, 20).unwrap())
            .await
    );
    assert_eq!(err.kind(), ErrorKind::Internal);
}
