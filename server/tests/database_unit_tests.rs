//! Unit tests for database operations
//!
//! These tests verify the SQLite-backed repositories against a real
//! temp-file database: schema creation, column mapping, insertion order
//! and matched-row reporting.

mod common;

use std::sync::Arc;

use chrono::Utc;
use common::fixtures::*;
use servicewatch::database::{ApiKeyRepository, ServiceRepository};
use servicewatch::keys::ApiKey;
use servicewatch::registry::seed::default_catalog;
use servicewatch::registry::types::{
    ServiceCategory, ServiceStatus, StatusEntry, StatusHistory,
};
use sqlx::Row;

#[tokio::test]
async fn test_database_initialization() {
    let db = TestDatabase::new()
        .await
        .expect("Failed to create test database");
    let pool = db.pool();

    // Verify tables exist
    let result = sqlx::query("SELECT name FROM sqlite_master WHERE type='table'")
        .fetch_all(pool)
        .await
        .expect("Failed to query tables");

    let table_names: Vec<String> = result
        .iter()
        .map(|row| row.get::<String, _>("name"))
        .collect();

    assert!(table_names.contains(&"services".to_string()));
    assert!(table_names.contains(&"api_keys".to_string()));
}

#[tokio::test]
async fn test_service_roundtrip_preserves_all_columns() {
    let db = TestDatabase::new().await.unwrap();
    let repo: Arc<dyn ServiceRepository> = db.database();

    let mut history = StatusHistory::new();
    history.push(StatusEntry {
        status: ServiceStatus::Online,
        timestamp: Utc::now(),
    });
    history.push(StatusEntry {
        status: ServiceStatus::Error,
        timestamp: Utc::now(),
    });

    let mut original = service("full");
    original.name = "MINIO".to_string();
    original.description = "Object storage service".to_string();
    original.status = ServiceStatus::Offline;
    original.api_url = Some("https://minioback.example.test".to_string());
    original.webhook_url = Some("https://hooks.example.test/minio".to_string());
    original.category = Some(ServiceCategory::Infrastructure);
    original.is_favorite = true;
    original.last_checked = Some(Utc::now());
    original.status_history = history;

    let echoed = repo.insert(&original).await.unwrap();
    assert_eq!(echoed, "full", "insert echoes the record id");

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    let loaded = &all[0];

    assert_eq!(loaded.id, original.id);
    assert_eq!(loaded.name, original.name);
    assert_eq!(loaded.description, original.description);
    assert_eq!(loaded.status, ServiceStatus::Offline);
    assert_eq!(loaded.api_url, original.api_url);
    assert_eq!(loaded.webhook_url, original.webhook_url);
    assert_eq!(loaded.category, Some(ServiceCategory::Infrastructure));
    assert!(loaded.is_favorite);
    assert_eq!(
        loaded.last_checked.map(|t| t.timestamp()),
        original.last_checked.map(|t| t.timestamp())
    );
    assert_eq!(loaded.status_history.len(), 2);
    let statuses: Vec<ServiceStatus> =
        loaded.status_history.iter().map(|e| e.status).collect();
    assert_eq!(statuses, [ServiceStatus::Online, ServiceStatus::Error]);

    // Raw column shapes
    let row = sqlx::query("SELECT status, is_favorite, status_history FROM services WHERE id = ?")
        .bind("full")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(row.get::<String, _>("status"), "offline");
    assert!(row.get::<bool, _>("is_favorite"));
    assert!(row.get::<String, _>("status_history").starts_with('['));
}

#[tokio::test]
async fn test_find_all_returns_insertion_order() {
    let db = TestDatabase::new().await.unwrap();
    let repo: Arc<dyn ServiceRepository> = db.database();

    for id in ["c", "a", "b"] {
        repo.insert(&service(id)).await.unwrap();
    }

    let ids: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, ["c", "a", "b"], "listing keeps insertion order");
}

#[tokio::test]
async fn test_update_reports_matched_rows() {
    let db = TestDatabase::new().await.unwrap();
    let repo: Arc<dyn ServiceRepository> = db.database();

    repo.insert(&service("a")).await.unwrap();

    let mut changed = service("a");
    changed.name = "renamed".to_string();
    changed.status = ServiceStatus::Error;

    assert!(repo.update("a", &changed).await.unwrap());
    assert!(
        !repo.update("missing", &changed).await.unwrap(),
        "updating an unknown id matches nothing"
    );

    let all = repo.find_all().await.unwrap();
    assert_eq!(all[0].name, "renamed");
    assert_eq!(all[0].status, ServiceStatus::Error);
}

#[tokio::test]
async fn test_delete_reports_matched_rows() {
    let db = TestDatabase::new().await.unwrap();
    let repo: Arc<dyn ServiceRepository> = db.database();

    repo.insert(&service("a")).await.unwrap();
    repo.insert(&service("b")).await.unwrap();

    assert!(repo.delete("a").await.unwrap());
    assert!(!repo.delete("a").await.unwrap(), "second delete matches nothing");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_insert_many_seeds_whole_catalog() {
    let db = TestDatabase::new().await.unwrap();
    let repo: Arc<dyn ServiceRepository> = db.database();

    let catalog = default_catalog();
    repo.insert_many(&catalog).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), catalog.len() as i64);

    let ids: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    let expected: Vec<String> = catalog.iter().map(|s| s.id.clone()).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_history_column_stores_json_array() {
    let db = TestDatabase::new().await.unwrap();
    let repo: Arc<dyn ServiceRepository> = db.database();

    let mut record = service("hist");
    for status in [ServiceStatus::Online, ServiceStatus::Offline, ServiceStatus::Online] {
        record.status_history.push(history_entry(status));
    }
    repo.insert(&record).await.unwrap();

    let raw: String = sqlx::query_scalar("SELECT status_history FROM services WHERE id = ?")
        .bind("hist")
        .fetch_one(db.pool())
        .await
        .unwrap();

    let entries: Vec<StatusEntry> = serde_json::from_str(&raw).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].status, ServiceStatus::Offline);
}

#[tokio::test]
async fn test_api_key_roundtrip_and_delete() {
    let db = TestDatabase::new().await.unwrap();
    let repo: Arc<dyn ApiKeyRepository> = db.database();

    let key = ApiKey {
        id: "k1".to_string(),
        name: "deploy".to_string(),
        key: "sk_0123456789abcdefghijklmnopqrstuv".to_string(),
        created_at: Utc::now(),
    };
    repo.insert(&key).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "deploy");
    assert_eq!(all[0].key, key.key);

    let raw: String = sqlx::query_scalar("SELECT key FROM api_keys WHERE id = ?")
        .bind("k1")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(raw, key.key);

    assert!(repo.delete("k1").await.unwrap());
    assert!(!repo.delete("k1").await.unwrap());
    assert!(repo.find_all().await.unwrap().is_empty());
}
