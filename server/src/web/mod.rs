// File: server/src/web/mod.rs
pub mod handlers;
pub mod server;

pub use server::{create_router, start_web_server};

use std::sync::Arc;

use crate::keys::ApiKeyStore;
use crate::registry::ServiceRegistry;

// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ServiceRegistry>,
    pub api_keys: Arc<ApiKeyStore>,
}

impl AppState {
    pub fn new(registry: Arc<ServiceRegistry>, api_keys: Arc<ApiKeyStore>) -> Self {
        Self { registry, api_keys }
    }
}
