//! Test database utilities backed by a temp-directory SQLite file.

use anyhow::Result;
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;

use servicewatch::database::Database;

/// Database wrapper that keeps its temp directory alive for the test's
/// duration. Each instance is fully isolated.
pub struct TestDatabase {
    database: Arc<Database>,
    _dir: TempDir,
}

impl TestDatabase {
    /// Create a fresh database with the production schema applied.
    pub async fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("servicewatch-test.db");
        let database = Database::new(&path.to_string_lossy()).await?;
        Ok(Self {
            database: Arc::new(database),
            _dir: dir,
        })
    }

    pub fn database(&self) -> Arc<Database> {
        self.database.clone()
    }

    /// Get the raw pool for direct SQL assertions.
    pub fn pool(&self) -> &SqlitePool {
        self.database.pool()
    }
}
