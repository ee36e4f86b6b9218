//! API key management endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::common::{store_error_response, ApiResponse, ApiResult};
use crate::keys::ApiKey;
use crate::web::AppState;

#[derive(Deserialize)]
pub struct CreateApiKeyRequest {
    pub name: String,
}

pub async fn list_api_keys(State(state): State<AppState>) -> ApiResult<Vec<ApiKey>> {
    let keys = state.api_keys.list().await;
    match state.api_keys.last_error().await {
        Some(message) => Ok(Json(ApiResponse::success_with_message(keys, message))),
        None => Ok(Json(ApiResponse::success(keys))),
    }
}

pub async fn create_api_key(
    State(state): State<AppState>,
    Json(req): Json<CreateApiKeyRequest>,
) -> ApiResult<ApiKey> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("API key name must not be empty".to_string())),
        ));
    }

    match state.api_keys.create(name).await {
        Ok(api_key) => Ok(Json(ApiResponse::success(api_key))),
        Err(e) => Err(store_error_response("Failed to create API key", e)),
    }
}

pub async fn delete_api_key(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Value> {
    match state.api_keys.delete(&id).await {
        Ok(()) => Ok(Json(ApiResponse::success(json!({ "id": id })))),
        Err(e) => Err(store_error_response(
            &format!("Failed to delete API key {}", id),
            e,
        )),
    }
}
