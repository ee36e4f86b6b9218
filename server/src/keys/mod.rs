//! API key issuance and bookkeeping.
//!
//! Keys are opaque bearer strings handed out once at creation. The store
//! keeps the issued key verbatim so the dashboard can list it again; there
//! is no hashing and no scoping, keys only exist as directory records.

use chrono::{DateTime, Utc};
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};
use uuid::Uuid;

use crate::database::ApiKeyRepository;
use crate::errors::StoreError;

pub const API_KEY_PREFIX: &str = "sk_";
const API_KEY_RANDOM_LEN: usize = 32;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: String,
    pub name: String,
    pub key: String,
    pub created_at: DateTime<Utc>,
}

pub struct ApiKeyStore {
    repository: Arc<dyn ApiKeyRepository>,
    keys: RwLock<Vec<ApiKey>>,
    load_error: RwLock<Option<String>>,
}

impl ApiKeyStore {
    pub fn new(repository: Arc<dyn ApiKeyRepository>) -> Self {
        Self {
            repository,
            keys: RwLock::new(Vec::new()),
            load_error: RwLock::new(None),
        }
    }

    /// Pulls all keys from the repository. A read failure leaves the store
    /// usable with an empty list and a surfaced error message.
    pub async fn load(&self) {
        match self.repository.find_all().await {
            Ok(keys) => {
                info!("Loaded {} API keys", keys.len());
                *self.keys.write().await = keys;
                *self.load_error.write().await = None;
            }
            Err(e) => {
                error!("Failed to load API keys: {}", e);
                *self.keys.write().await = Vec::new();
                *self.load_error.write().await =
                    Some("Failed to load API keys".to_string());
            }
        }
    }

    pub async fn create(&self, name: &str) -> Result<ApiKey, StoreError> {
        let api_key = ApiKey {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            key: generate_key(),
            created_at: Utc::now(),
        };

        self.repository
            .insert(&api_key)
            .await
            .map_err(StoreError::write_failed)?;

        let mut keys = self.keys.write().await;
        keys.push(api_key.clone());
        info!("Created API key '{}' ({})", api_key.name, api_key.id);
        Ok(api_key)
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let matched = self
            .repository
            .delete(id)
            .await
            .map_err(StoreError::write_failed)?;
        if !matched {
            return Err(StoreError::NotFound { id: id.to_string() });
        }

        let mut keys = self.keys.write().await;
        keys.retain(|k| k.id != id);
        info!("Deleted API key {}", id);
        Ok(())
    }

    pub async fn list(&self) -> Vec<ApiKey> {
        let keys = self.keys.read().await;
        keys.clone()
    }

    pub async fn last_error(&self) -> Option<String> {
        let load_error = self.load_error.read().await;
        load_error.clone()
    }
}

fn generate_key() -> String {
    let random: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(API_KEY_RANDOM_LEN)
        .map(char::from)
        .collect();
    format!("{}{}", API_KEY_PREFIX, random)
}
