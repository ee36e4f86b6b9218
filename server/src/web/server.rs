// File: server/src/web/server.rs
use crate::config::Config;
use crate::keys::ApiKeyStore;
use crate::registry::ServiceRegistry;
use crate::web::{handlers, AppState};
use anyhow::Result;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub async fn start_web_server(
    config: Arc<Config>,
    registry: Arc<ServiceRegistry>,
    api_keys: Arc<ApiKeyStore>,
) -> Result<()> {
    let state = AppState::new(registry, api_keys);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // === SERVICE DIRECTORY ROUTES ===
        .route(
            "/api/services",
            get(handlers::list_services).post(handlers::create_service),
        )
        .route("/api/services/refresh", post(handlers::refresh_all_services))
        .route(
            "/api/services/{id}",
            put(handlers::update_service).delete(handlers::delete_service),
        )
        .route(
            "/api/services/{id}/favorite",
            post(handlers::toggle_favorite),
        )
        .route("/api/services/{id}/check", post(handlers::check_service))
        // === DASHBOARD ROUTES ===
        .route(
            "/api/dashboard/summary",
            get(handlers::get_dashboard_summary),
        )
        // === API KEY ROUTES ===
        .route(
            "/api/keys",
            get(handlers::list_api_keys).post(handlers::create_api_key),
        )
        .route("/api/keys/{id}", delete(handlers::delete_api_key))
        // === STATIC FILES ===
        .nest_service("/assets", ServeDir::new("ui/dist/assets"))
        // Add middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
