// File: server/src/main.rs
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod database;
mod errors;
mod filter;
mod keys;
mod probe;
mod registry;
mod summary;
mod web;

use config::Config;
use database::{ApiKeyRepository, Database, MemoryStore, ServiceRepository};
use keys::ApiKeyStore;
use probe::{SimulatedProber, StatusProber};
use registry::ServiceRegistry;

use web::start_web_server;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with reduced verbosity
    let env_filter = EnvFilter::from_default_env()
        .add_directive("servicewatch=info".parse()?)
        .add_directive("tower_http=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("sqlx=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting ServiceWatch directory server");

    // Load configuration, falling back to built-in defaults
    let config = match Config::load("config").await {
        Ok(config) => {
            info!("Configuration loaded from config/main.toml");
            config
        }
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults.", e);
            Config::default()
        }
    };
    let config = Arc::new(config);

    // Initialize storage, falling back to in-memory when the database is broken
    let (service_repository, api_key_repository): (
        Arc<dyn ServiceRepository>,
        Arc<dyn ApiKeyRepository>,
    ) = match Database::new(&config.database_path).await {
        Ok(database) => {
            info!("Database initialized at {}", config.database_path);
            let database = Arc::new(database);
            (database.clone(), database)
        }
        Err(e) => {
            warn!(
                "Database unavailable: {}. Falling back to in-memory storage.",
                e
            );
            let memory = Arc::new(MemoryStore::new());
            (memory.clone(), memory)
        }
    };

    // Initialize the status prober
    let prober: Arc<dyn StatusProber> = Arc::new(SimulatedProber::new());

    // Initialize the service registry and seed/load the catalog
    let registry = Arc::new(ServiceRegistry::new(service_repository, prober));
    registry.load().await;
    info!("Service registry ready with {} services", registry.list().await.len());

    // Initialize the API key store
    let api_keys = Arc::new(ApiKeyStore::new(api_key_repository));
    api_keys.load().await;

    // Start periodic status checks with configurable interval
    let registry_clone = registry.clone();
    let check_interval = config.check_interval_seconds;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(check_interval));
        loop {
            interval.tick().await;

            // Detached per cycle; ticks keep firing while a slow sweep is still running
            let registry = registry_clone.clone();
            tokio::spawn(async move {
                registry.check_all().await;
            });
        }
    });

    info!(
        "Background status checks started with {}s interval",
        check_interval
    );

    // Start web server
    start_web_server(config, registry, api_keys).await?;

    Ok(())
}
