pub mod config;
pub mod database;
pub mod errors;
pub mod filter;
pub mod keys;
pub mod probe;
pub mod registry;
pub mod summary;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use database::{ApiKeyRepository, Database, MemoryStore, ServiceRepository};
pub use errors::{PersistenceError, StoreError};
pub use keys::{ApiKey, ApiKeyStore};
pub use probe::{SimulatedProber, StatusProber};
pub use registry::ServiceRegistry;
pub use web::{create_router, start_web_server, AppState};
