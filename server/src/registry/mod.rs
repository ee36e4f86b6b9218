// File: server/src/registry/mod.rs

pub mod seed;
pub mod types;

pub use types::*;

use anyhow::Result;
use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::database::ServiceRepository;
use crate::errors::StoreError;
use crate::probe::StatusProber;

/// Service record store.
///
/// Holds the authoritative in-memory set (order-preserving) and writes
/// through to the injected repository. Persistence failures degrade the
/// store rather than killing it: reads fall back to the default catalog,
/// probe verdicts stick in memory even when the write fails.
pub struct ServiceRegistry {
    repository: Arc<dyn ServiceRepository>,
    prober: Arc<dyn StatusProber>,
    services: RwLock<Vec<Service>>,
    load_error: RwLock<Option<String>>,
}

impl ServiceRegistry {
    pub fn new(repository: Arc<dyn ServiceRepository>, prober: Arc<dyn StatusProber>) -> Self {
        Self {
            repository,
            prober,
            services: RwLock::new(Vec::new()),
            load_error: RwLock::new(None),
        }
    }

    /// Loads the directory from the repository, seeding the default catalog
    /// on first run. Never fails: a broken repository leaves the registry
    /// running on the built-in catalog with an error message surfaced
    /// through [`ServiceRegistry::last_error`].
    pub async fn load(&self) {
        match self.load_from_repository().await {
            Ok(services) => {
                info!("Loaded {} services", services.len());
                *self.services.write().await = services;
                *self.load_error.write().await = None;
            }
            Err(e) => {
                error!("Failed to load services: {}", e);
                *self.services.write().await = seed::default_catalog();
                *self.load_error.write().await =
                    Some("Failed to load services. Using local data instead.".to_string());
            }
        }
    }

    async fn load_from_repository(&self) -> Result<Vec<Service>> {
        let count = self.repository.count().await?;
        if count == 0 {
            info!("Empty backing store, seeding default service catalog");
            let catalog = seed::default_catalog();
            self.repository.insert_many(&catalog).await?;
        }
        self.repository.find_all().await
    }

    pub async fn list(&self) -> Vec<Service> {
        let services = self.services.read().await;
        services.clone()
    }

    pub async fn last_error(&self) -> Option<String> {
        let load_error = self.load_error.read().await;
        load_error.clone()
    }

    pub async fn add(&self, new: NewService) -> Result<Service, StoreError> {
        let service = Service {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            description: new.description,
            // New entries start as online; the next check corrects them.
            status: ServiceStatus::Online,
            main_url: new.main_url,
            api_url: new.api_url,
            webhook_url: new.webhook_url,
            category: new.category,
            is_favorite: false,
            last_checked: Some(Utc::now()),
            status_history: StatusHistory::new(),
        };

        self.repository
            .insert(&service)
            .await
            .map_err(StoreError::write_failed)?;

        let mut services = self.services.write().await;
        services.push(service.clone());
        info!("Added service '{}' ({})", service.name, service.id);
        Ok(service)
    }

    pub async fn update(&self, id: &str, patch: ServicePatch) -> Result<Service, StoreError> {
        let merged = {
            let services = self.services.read().await;
            match services.iter().find(|s| s.id == id) {
                Some(current) => {
                    let mut merged = current.clone();
                    patch.apply(&mut merged);
                    merged
                }
                None => return Err(StoreError::NotFound { id: id.to_string() }),
            }
        };

        let matched = self
            .repository
            .update(id, &merged)
            .await
            .map_err(StoreError::write_failed)?;
        if !matched {
            return Err(StoreError::NotFound { id: id.to_string() });
        }

        let mut services = self.services.write().await;
        if let Some(slot) = services.iter_mut().find(|s| s.id == id) {
            *slot = merged.clone();
        }
        info!("Updated service {}", id);
        Ok(merged)
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

        let mut services = self.services.write().await;
        services.retain(|s| s.id != id);
        info!("Deleted service {}", id);
        Ok(())
    }

    pub async fn toggle_favorite(&self, id: &str) -> Result<Service, StoreError> {
        let toggled = {
            let services = self.services.read().await;
            match services.iter().find(|s| s.id == id) {
                Some(service) => {
                    let mut toggled = service.clone();
                    toggled.is_favorite = !toggled.is_favorite;
                    toggled
                }
                None => return Err(StoreError::NotFound { id: id.to_string() }),
            }
        };

        let matched = self
            .repository
            .update(id, &toggled)
            .await
            .map_err(StoreError::write_failed)?;
        if !matched {
            return Err(StoreError::NotFound { id: id.to_string() });
        }

        let mut services = self.services.write().await;
        if let Some(slot) = services.iter_mut().find(|s| s.id == id) {
            *slot = toggled.clone();
        }
        Ok(toggled)
    }

    /// Probes a single service and records the verdict. The in-memory
    /// record is updated even when the persistence write fails; the
    /// failure is only logged.
    pub async fn check_status(&self, id: &str) -> Result<Service, StoreError> {
        let service = {
            let services = self.services.read().await;
            services.iter().find(|s| s.id == id).cloned()
        };
        let service = match service {
            Some(service) => service,
            None => return Err(StoreError::NotFound { id: id.to_string() }),
        };

        let outcome = self.prober.probe(&service.main_url).await;
        let updated = apply_probe_outcome(service, outcome);

        if let Err(e) = self.repository.update(id, &updated).await {
            error!(
                "Failed to persist status for {} ({}): {}",
                updated.name, id, e
            );
        }

        let mut services = self.services.write().await;
        if let Some(slot) = services.iter_mut().find(|s| s.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Probes every service concurrently, then replaces the whole in-memory
    /// set with the results (last write wins). Persistence is best effort,
    /// write failures are logged per service and do not fail the sweep.
    pub async fn check_all(&self) -> Vec<Service> {
        let snapshot = self.list().await;
        let mut tasks = Vec::new();

        for service in &snapshot {
            let task = {
                let prober = self.prober.clone();
                let service = service.clone();
                tokio::spawn(async move {
                    let outcome = prober.probe(&service.main_url).await;
                    apply_probe_outcome(service, outcome)
                })
            };
            tasks.push(task);
        }

        let results = join_all(tasks).await;
        let mut updated = Vec::with_capacity(snapshot.len());
        for (result, original) in results.into_iter().zip(snapshot.into_iter()) {
            match result {
                Ok(service) => updated.push(service),
                Err(e) => {
                    error!("Status check task panicked for {}: {}", original.name, e);
                    updated.push(original);
                }
            }
        }

        for service in &updated {
            if let Err(e) = self.repository.update(&service.id, service).await {
                error!(
                    "Failed to persist status for {} ({}): {}",
                    service.name, service.id, e
                );
            }
        }

        let mut services = self.services.write().await;
        *services = updated.clone();
        info!("Checked {} services", updated.len());
        updated
    }
}

/// Folds a probe outcome into the service record. A successful probe
/// appends to the bounded history; a probe failure marks the service as
/// errored without a history entry. Both paths refresh `last_checked`.
fn apply_probe_outcome(mut service: Service, outcome: Result<ServiceStatus>) -> Service {
    let now = Utc::now();
    match outcome {
        Ok(status) => {
            service.status_history.push(StatusEntry {
                status,
                timestamp: now,
            });
            service.status = status;
            service.last_checked = Some(now);
        }
        Err(e) => {
            warn!("Probe failed for {} ({}): {}", service.name, service.id, e);
            service.status = ServiceStatus::Error;
            service.last_checked = Some(now);
        }
    }
    service
}
