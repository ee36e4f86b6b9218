//! Service directory endpoints: listing with filters, CRUD, status checks.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::common::{store_error_response, ApiResponse, ApiResult};
use crate::filter::{filter_services, ServiceFilter};
use crate::registry::types::{CategoryBucket, NewService, Service, ServicePatch, ServiceStatus};
use crate::web::AppState;

// Query parameters for the service list
#[derive(Deserialize)]
pub struct ListServicesQuery {
    /// Free-text search over name, description and main URL
    #[serde(default)]
    pub q: Option<String>,
    /// Comma-separated list of statuses to include
    #[serde(default)]
    pub status: Option<String>,
    /// Comma-separated list of category buckets to include
    #[serde(default)]
    pub category: Option<String>,
    /// true: favorites only, false: non-favorites only, absent: both
    #[serde(default)]
    pub favorite: Option<bool>,
}

fn build_filter(query: &ListServicesQuery) -> Result<ServiceFilter, String> {
    let mut filter = ServiceFilter::default();

    if let Some(q) = &query.q {
        filter.text = q.clone();
    }

    if let Some(raw) = &query.status {
        let mut statuses = Vec::new();
        for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match ServiceStatus::parse(token) {
                Some(status) => statuses.push(status),
                None => return Err(format!("Unknown status '{}'", token)),
            }
        }
        filter.statuses = statuses;
    }

    if let Some(raw) = &query.category {
        let mut categories = Vec::new();
        for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match CategoryBucket::parse(token) {
                Some(bucket) => categories.push(bucket),
                None => return Err(format!("Unknown category '{}'", token)),
            }
        }
        filter.categories = categories;
    }

    filter.favorite = query.favorite;
    Ok(filter)
}

pub async fn list_services(
    Query(query): Query<ListServicesQuery>,
    State(state): State<AppState>,
) -> ApiResult<Vec<Service>> {
    let filter = match build_filter(&query) {
        Ok(filter) => filter,
        Err(message) => {
            return Err((StatusCode::BAD_REQUEST, Json(ApiResponse::error(message))));
        }
    };

    let services = state.registry.list().await;
    let filtered = filter_services(&services, &filter);

    // A degraded load (fallback catalog) is still a successful response,
    // but the notice rides along for the UI banner.
    match state.registry.last_error().await {
        Some(message) => Ok(Json(ApiResponse::success_with_message(filtered, message))),
        None => Ok(Json(ApiResponse::success(filtered))),
    }
}

pub async fn create_service(
    State(state): State<AppState>,
    Json(req): Json<NewService>,
) -> ApiResult<Service> {
    match state.registry.add(req).await {
        Ok(service) => Ok(Json(ApiResponse::success(service))),
        Err(e) => Err(store_error_response("Failed to add service", e)),
    }
}

pub async fn update_service(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(req): Json<ServicePatch>,
) -> ApiResult<Service> {
    match state.registry.update(&id, req).await {
        Ok(service) => Ok(Json(ApiResponse::success(service))),
        Err(e) => Err(store_error_response(
            &format!("Failed to update service {}", id),
            e,
        )),
    }
}

pub async fn delete_service(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Value> {
    match state.registry.delete(&id).await {
        Ok(()) => Ok(Json(ApiResponse::success(json!({ "id": id })))),
        Err(e) => Err(store_error_response(
            &format!("Failed to delete service {}", id),
            e,
        )),
    }
}

pub async fn toggle_favorite(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Service> {
    match state.registry.toggle_favorite(&id).await {
        Ok(service) => Ok(Json(ApiResponse::success(service))),
        Err(e) => Err(store_error_response(
            &format!("Failed to toggle favorite for {}", id),
            e,
        )),
    }
}

pub async fn check_service(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Service> {
    info!("Manual status check requested for: {}", id);
    match state.registry.check_status(&id).await {
        Ok(service) => Ok(Json(ApiResponse::success(service))),
        Err(e) => Err(store_error_response(
            &format!("Failed to check service {}", id),
            e,
        )),
    }
}

pub async fn refresh_all_services(State(state): State<AppState>) -> ApiResult<Vec<Service>> {
    info!("Manual refresh of all services requested");
    let services = state.registry.check_all().await;
    Ok(Json(ApiResponse::success(services)))
}
