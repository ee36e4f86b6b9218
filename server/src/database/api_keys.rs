//! API key repository operations on SQLite.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::Row;

use super::{ApiKeyRepository, Database};
use crate::keys::ApiKey;

#[async_trait]
impl ApiKeyRepository for Database {
    async fn find_all(&self) -> Result<Vec<ApiKey>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, key, created_at
            FROM api_keys
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut keys = Vec::new();
        for row in rows {
            keys.push(ApiKey {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                key: row.try_get("key")?,
                created_at: row.try_get("created_at")?,
            });
        }
        Ok(keys)
    }

    async fn insert(&self, key: &ApiKey) -> Result<String> {
        sqlx::query(
            r#"
            INSERT INTO api_keys (id, name, key, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&key.id)
        .bind(&key.name)
        .bind(&key.key)
        .bind(key.created_at)
        .execute(&self.pool)
        .await?;

        Ok(key.id.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM api_keys WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
