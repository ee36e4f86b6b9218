//! Persistence layer for the service directory.
//!
//! The stores never talk to SQLite directly; they go through the repository
//! traits so the backing store stays swappable (SQLite here, the in-memory
//! shim in `memory`, anything document-shaped elsewhere).
//!
//! The module is organized into submodules:
//! - `services` - service repository operations on SQLite
//! - `api_keys` - API key repository operations on SQLite
//! - `memory` - in-memory repository shim (fallback and test double)

mod api_keys;
mod memory;
mod services;

pub use memory::MemoryStore;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Sqlite, SqlitePool};
use std::path::Path;
use tracing::{error, info};

use crate::keys::ApiKey;
use crate::registry::types::Service;

/// Document-store shaped persistence surface for services.
///
/// `update` replaces the stored record and reports whether a record with
/// that id existed; `delete` reports the same. Field merging is the
/// caller's job.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Service>>;
    /// Inserts the record and echoes its id back.
    async fn insert(&self, service: &Service) -> Result<String>;
    async fn insert_many(&self, services: &[Service]) -> Result<()>;
    async fn update(&self, id: &str, service: &Service) -> Result<bool>;
    async fn delete(&self, id: &str) -> Result<bool>;
    async fn count(&self) -> Result<i64>;
}

/// Reduced repository surface for API keys (no update: keys are immutable).
#[async_trait]
pub trait ApiKeyRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<ApiKey>>;
    async fn insert(&self, key: &ApiKey) -> Result<String>;
    async fn delete(&self, id: &str) -> Result<bool>;
}

pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Expose pool for integration test queries
    #[allow(dead_code)]
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    pub async fn new(database_path: &str) -> Result<Self> {
        info!("Initializing database at {}", database_path);

        // Ensure parent directory exists
        if let Some(parent) = Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = tokio::fs::create_dir_all(parent).await {
                    error!("FAILED to create parent directory {:?}: {}", parent, e);
                    return Err(e.into());
                }
            }
        }

        let database_url = format!("sqlite:{}?mode=rwc", database_path);
        let pool = match SqlitePool::connect(&database_url).await {
            Ok(pool) => pool,
            Err(e) => {
                error!("FAILED to connect to database at {}: {}", database_url, e);
                return Err(e.into());
            }
        };

        let database = Self { pool };

        match database.initialize_tables().await {
            Ok(_) => info!("Database tables initialized successfully"),
            Err(e) => {
                error!("Database table initialization failed: {}", e);
                return Err(e);
            }
        }

        Ok(database)
    }

    async fn initialize_tables(&self) -> Result<()> {
        let services_table_sql = r#"
            CREATE TABLE IF NOT EXISTS services (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                status TEXT NOT NULL,
                main_url TEXT NOT NULL,
                api_url TEXT,
                webhook_url TEXT,
                category TEXT,
                is_favorite BOOLEAN NOT NULL DEFAULT 0,
                last_checked DATETIME,
                status_history TEXT NOT NULL DEFAULT '[]'
            )
        "#;

        if let Err(e) = sqlx::query(services_table_sql).execute(&self.pool).await {
            error!("FAILED to create services table: {}", e);
            return Err(e.into());
        }

        let api_keys_table_sql = r#"
            CREATE TABLE IF NOT EXISTS api_keys (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                key TEXT NOT NULL,
                created_at DATETIME NOT NULL
            )
        "#;

        if let Err(e) = sqlx::query(api_keys_table_sql).execute(&self.pool).await {
            error!("FAILED to create api_keys table: {}", e);
            return Err(e.into());
        }

        Ok(())
    }
}
