//! Repository doubles with scripted persistence failures.

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use servicewatch::database::{ApiKeyRepository, MemoryStore, ServiceRepository};
use servicewatch::keys::ApiKey;
use servicewatch::registry::types::Service;

/// Repository where every operation fails, as if the backing store were
/// offline. Implements both repository surfaces.
pub struct FailingRepository;

#[async_trait]
impl ServiceRepository for FailingRepository {
    async fn find_all(&self) -> Result<Vec<Service>> {
        Err(anyhow!("storage offline"))
    }

    async fn insert(&self, _service: &Service) -> Result<String> {
        Err(anyhow!("storage offline"))
    }

    async fn insert_many(&self, _services: &[Service]) -> Result<()> {
        Err(anyhow!("storage offline"))
    }

    async fn update(&self, _id: &str, _service: &Service) -> Result<bool> {
        Err(anyhow!("storage offline"))
    }

    async fn delete(&self, _id: &str) -> Result<bool> {
        Err(anyhow!("storage offline"))
    }

    async fn count(&self) -> Result<i64> {
        Err(anyhow!("storage offline"))
    }
}

#[async_trait]
impl ApiKeyRepository for FailingRepository {
    async fn find_all(&self) -> Result<Vec<ApiKey>> {
        Err(anyhow!("storage offline"))
    }

    async fn insert(&self, _key: &ApiKey) -> Result<String> {
        Err(anyhow!("storage offline"))
    }

    async fn delete(&self, _id: &str) -> Result<bool> {
        Err(anyhow!("storage offline"))
    }
}

/// Repository that serves reads from a pre-seeded in-memory store but fails
/// every write. Lets tests load a populated registry and then watch how
/// write failures are absorbed.
pub struct WriteFailingRepository {
    inner: MemoryStore,
}

impl WriteFailingRepository {
    pub async fn seeded(services: &[Service]) -> Self {
        let inner = MemoryStore::new();
        ServiceRepository::insert_many(&inner, services)
            .await
            .expect("seeding the inner store");
        Self { inner }
    }
}

#[async_trait]
impl ServiceRepository for WriteFailingRepository {
    async fn find_all(&self) -> Result<Vec<Service>> {
        ServiceRepository::find_all(&self.inner).await
    }

    async fn insert(&self, _service: &Service) -> Result<String> {
        Err(anyhow!("write refused"))
    }

    async fn insert_many(&self, _services: &[Service]) -> Result<()> {
        Err(anyhow!("write refused"))
    }

    async fn update(&self, _id: &str, _service: &Service) -> Result<bool> {
        Err(anyhow!("write refused"))
    }

    async fn delete(&self, _id: &str) -> Result<bool> {
        Err(anyhow!("write refused"))
    }

    async fn count(&self) -> Result<i64> {
        ServiceRepository::count(&self.inner).await
    }
}
