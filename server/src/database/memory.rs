//! In-memory repository shim.
//!
//! Backs the dashboard when no database is reachable and doubles as the
//! repository used by store tests. Same matched-boolean semantics as the
//! SQLite implementation.

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ApiKeyRepository, ServiceRepository};
use crate::keys::ApiKey;
use crate::registry::types::Service;

pub struct MemoryStore {
    services: RwLock<Vec<Service>>,
    api_keys: RwLock<Vec<ApiKey>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            services: RwLock::new(Vec::new()),
            api_keys: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Service>> {
        let services = self.services.read().await;
        Ok(services.clone())
    }

    async fn insert(&self, service: &Service) -> Result<String> {
        let mut services = self.services.write().await;
        if services.iter().any(|s| s.id == service.id) {
            anyhow::bail!("Duplicate service id: {}", service.id);
        }
        services.push(service.clone());
        Ok(service.id.clone())
    }

    async fn insert_many(&self, batch: &[Service]) -> Result<()> {
        let mut services = self.services.write().await;
        for service in batch {
            if services.iter().any(|s| s.id == service.id) {
                anyhow::bail!("Duplicate service id: {}", service.id);
            }
            services.push(service.clone());
        }
        Ok(())
    }

    async fn update(&self, id: &str, service: &Service) -> Result<bool> {
        let mut services = self.services.write().await;
        match services.iter_mut().find(|s| s.id == id) {
            Some(slot) => {
                *slot = service.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut services = self.services.write().await;
        let before = services.len();
        services.retain(|s| s.id != id);
        Ok(services.len() < before)
    }

    async fn count(&self) -> Result<i64> {
        let services = self.services.read().await;
        Ok(services.len() as i64)
    }
}

#[async_trait]
impl ApiKeyRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<ApiKey>> {
        let keys = self.api_keys.read().await;
        Ok(keys.clone())
    }

    async fn insert(&self, key: &ApiKey) -> Result<String> {
        let mut keys = self.api_keys.write().await;
        if keys.iter().any(|k| k.id == key.id) {
            anyhow::bail!("Duplicate API key id: {}", key.id);
        }
        keys.push(key.clone());
        Ok(key.id.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut keys = self.api_keys.write().await;
        let before = keys.len();
        keys.retain(|k| k.id != id);
        Ok(keys.len() < before)
    }
}
