//! Service repository operations on SQLite.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{Database, ServiceRepository};
use crate::registry::types::{Service, ServiceCategory, ServiceStatus, StatusHistory};

fn service_from_row(row: &SqliteRow) -> Result<Service> {
    let status_raw: String = row.try_get("status")?;
    let status = ServiceStatus::parse(&status_raw)
        .ok_or_else(|| anyhow::anyhow!("Unknown service status '{}' in database", status_raw))?;

    let category_raw: Option<String> = row.try_get("category")?;
    let category = match category_raw {
        Some(raw) => Some(ServiceCategory::parse(&raw).ok_or_else(|| {
            anyhow::anyhow!("Unknown service category '{}' in database", raw)
        })?),
        None => None,
    };

    let history_raw: String = row.try_get("status_history")?;
    let status_history: StatusHistory = serde_json::from_str(&history_raw)?;

    Ok(Service {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        status,
        main_url: row.try_get("main_url")?,
        api_url: row.try_get("api_url")?,
        webhook_url: row.try_get("webhook_url")?,
        category,
        is_favorite: row.try_get("is_favorite")?,
        last_checked: row.try_get("last_checked")?,
        status_history,
    })
}

#[async_trait]
impl ServiceRepository for Database {
    async fn find_all(&self) -> Result<Vec<Service>> {
        // rowid order keeps the catalog in insertion order across restarts
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, status, main_url, api_url, webhook_url,
                   category, is_favorite, last_checked, status_history
            FROM services
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut services = Vec::new();
        for row in rows {
            services.push(service_from_row(&row)?);
        }
        Ok(services)
    }

    async fn insert(&self, service: &Service) -> Result<String> {
        sqlx::query(
            r#"
            INSERT INTO services (id, name, description, status, main_url, api_url,
                                  webhook_url, category, is_favorite, last_checked,
                                  status_history)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&service.id)
        .bind(&service.name)
        .bind(&service.description)
        .bind(service.status.as_str())
        .bind(&service.main_url)
        .bind(&service.api_url)
        .bind(&service.webhook_url)
        .bind(service.category.map(|c| c.as_str()))
        .bind(service.is_favorite)
        .bind(service.last_checked)
        .bind(serde_json::to_string(&service.status_history)?)
        .execute(&self.pool)
        .await?;

        Ok(service.id.clone())
    }

    async fn insert_many(&self, services: &[Service]) -> Result<()> {
        for service in services {
            self.insert(service).await?;
        }
        Ok(())
    }

    async fn update(&self, id: &str, service: &Service) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE services
            SET name = ?, description = ?, status = ?, main_url = ?, api_url = ?,
                webhook_url = ?, category = ?, is_favorite = ?, last_checked = ?,
                status_history = ?
            WHERE id = ?
            "#,
        )
        .bind(&service.name)
        .bind(&service.description)
        .bind(service.status.as_str())
        .bind(&service.main_url)
        .bind(&service.api_url)
        .bind(&service.webhook_url)
        .bind(service.category.map(|c| c.as_str()))
        .bind(service.is_favorite)
        .bind(service.last_checked)
        .bind(serde_json::to_string(&service.status_history)?)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM services")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
