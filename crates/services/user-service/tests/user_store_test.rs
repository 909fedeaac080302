//! Store tests against an in-memory SQLite database.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};
use tokio_test::{assert_err, assert_ok};
use uuid::Uuid;

use common::{DatabaseConfig, RequestContext};
use domain::{Argon2Hasher, ErrorKind, NewUser, PageRequest, UserRecord};
use user_service_lib::repository::entities::user as user_entity;
use user_service_lib::infra::Database;
use user_service_lib::repository::{UserRepository, UserStore};
use user_service_lib::service::{UserManager, UserService};

async fn memory_db() -> Database {
    // A single connection keeps every query on the same in-memory database.
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    Database::connect(&config).await.expect("in-memory database")
}

fn record(username: &str, offset_secs: i64) -> UserRecord {
    UserRecord {
        id: Uuid::new_v4(),
        username: username.to_string(),
        password_hash: "$argon2id$v=19$digest".to_string(),
        now: Utc::now() + Duration::seconds(offset_secs),
    }
}

#[tokio::test]
async fn test_empty_store_page() {
    let db = memory_db().await;
    let store = UserStore::new(db.get_connection());

    let page = assert_ok!(store.find_page(PageRequest::new(0, 20).unwrap()).await);
    assert!(page.content().is_empty());
    assert_eq!(page.total_elements(), 0);
    assert_eq!(page.total_pages(), 0);
}

#[tokio::test]
async fn test_insert_and_find_by_id() {
    let db = memory_db().await;
    let store = UserStore::new(db.get_connection());

    let inserted = assert_ok!(store.insert(record("John", 0)).await);
    assert_eq!(inserted.created_at, inserted.updated_at);

    let found = assert_ok!(store.find_by_id(inserted.id).await);
    assert_eq!(found.map(|u| u.username), Some("John".to_string()));

    let missing = assert_ok!(store.find_by_id(Uuid::new_v4()).await);
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_find_page_orders_by_creation() {
    let db = memory_db().await;
    let store = UserStore::new(db.get_connection());

    // Inserted out of order on purpose
    for (name, offset) in [("carol", 2), ("alice", 0), ("dave", 3), ("bob", 1), ("erin", 4)] {
        assert_ok!(store.insert(record(name, offset)).await);
    }

    let first = assert_ok!(store.find_page(PageRequest::new(0, 2).unwrap()).await);
    let names: Vec<_> = first.content().iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob"]);
    assert_eq!(first.total_elements(), 5);
    assert_eq!(first.total_pages(), 3);

    let last = assert_ok!(store.find_page(PageRequest::new(2, 2).unwrap()).await);
    let names: Vec<_> = last.content().iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["erin"]);
    assert!(last.is_last());

    let beyond = assert_ok!(store.find_page(PageRequest::new(7, 2).unwrap()).await);
    assert!(beyond.content().is_empty());
    assert_eq!(beyond.total_elements(), 5);
}

#[tokio::test]
async fn test_zero_size_page_still_counts() {
    let db = memory_db().await;
    let store = UserStore::new(db.get_connection());
    assert_ok!(store.insert(record("John", 0)).await);

    let page = assert_ok!(store.find_page(PageRequest::new(0, 0).unwrap()).await);
    assert!(page.content().is_empty());
    assert_eq!(page.total_elements(), 1);
    assert_eq!(page.total_pages(), 0);
}

#[tokio::test]
async fn test_stored_password_is_a_digest() {
    let db = memory_db().await;
    let store = Arc::new(UserStore::new(db.get_connection()));
    let service = UserManager::new(store, Arc::new(Argon2Hasher::new()));

    let user = assert_ok!(
        service
            .create(&RequestContext::default(), NewUser::new("John", "12345678"))
            .await
    );

    use sea_orm::EntityTrait;

    let row = user_entity::Entity::find_by_id(user.id)
        .one(db.connection())
        .await
        .unwrap()
        .unwrap();
    assert_ne!(row.password, "12345678");
    assert!(row.password.starts_with("$argon2"));
}

#[tokio::test]
async fn test_concurrent_creates_and_reads_stay_consistent() {
    let db = memory_db().await;
    let store: Arc<UserStore> = Arc::new(UserStore::new(db.get_connection()));

    let mut writers = Vec::new();
    let mut readers = Vec::new();
    for i in 0..20 {
        let writer = Arc::clone(&store);
        writers.push(tokio::spawn(async move {
            writer.insert(record(&format!("user{:02}", i), i)).await
        }));

        let reader = Arc::clone(&store);
        readers.push(tokio::spawn(async move {
            reader.find_page(PageRequest::new(0, 1000).unwrap()).await
        }));
    }

    for result in futures::future::join_all(writers).await {
        assert_ok!(result.unwrap());
    }

    for result in futures::future::join_all(readers).await {
        let page = assert_ok!(result.unwrap());
        assert_eq!(page.content().len() as i64, page.total_elements());
    }

    let page = assert_ok!(store.find_page(PageRequest::new(0, 1000).unwrap()).await);
    assert_eq!(page.total_elements(), 20);
}

#[tokio::test]
async fn test_migration_status_lists_applied() {
    let db = memory_db().await;
    let status = assert_ok!(db.migration_status().await);

    assert_eq!(status.len(), 1);
    assert_eq!(status[0].0, "m20240101_000001_create_users_table");
    assert!(status[0].1);
    assert_ok!(db.ping().await);
}

fn row(username: &str) -> user_entity::Model {
    let now = Utc::now();
    user_entity::Model {
        id: Uuid::new_v4(),
        username: username.to_string(),
        password: "$argon2id$v=19$digest".to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn count_row(total: i32) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::from(total))])
}

#[tokio::test]
async fn test_find_page_reads_rows_and_count_in_one_transaction() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results([vec![row("alice"), row("bob")]])
        .append_query_results([vec![count_row(5)]])
        .into_connection();
    let store = UserStore::new(db.clone());

    let page = assert_ok!(store.find_page(PageRequest::new(0, 2).unwrap()).await);
    assert_eq!(page.content().len(), 2);
    assert_eq!(page.total_elements(), 5);

    // Both statements were committed together, not issued one by one.
    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn test_find_page_count_failure_returns_no_partial_page() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results([vec![row("alice"), row("bob")]])
        .append_query_errors([DbErr::Custom("count failed".to_string())])
        .into_connection();
    let store = UserStore::new(db);

    let err = assert_err!(store.find_page(PageRequest::new(0, 2).unwrap()).await);
    assert_eq!(err.kind(), ErrorKind::Internal);
}

#[tokio::test]
async fn test_find_page_fetch_failure_skips_count() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_errors([DbErr::Custom("fetch failed".to_string())])
        .append_query_results([vec![count_row(5)]])
        .into_connection();
    let store = UserStore::new(db);

    let err = assert_err!(store.find_page(PageRequest::new(0, 2).unwrap()).await);
    assert_eq!(err.kind(), ErrorKind::Internal);
}
