// Common types and utilities for API handlers

use axum::{http::StatusCode, response::Json};
use chrono::Utc;
use serde::Serialize;
use tracing::error;

use crate::errors::StoreError;

// Helper type for API responses
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<()>>)>;

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Successful response that still carries a notice, used when the store
    /// is serving fallback data after a persistence failure.
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Maps store errors onto responses: missing records become 404, backing
/// store failures 500 (and get logged, missing records do not).
pub fn store_error_response(context: &str, err: StoreError) -> (StatusCode, Json<ApiResponse<()>>) {
    if err.is_not_found() {
        (StatusCode::NOT_FOUND, Json(ApiResponse::error(err.to_string())))
    } else {
        error!("{}: {}", context, err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(err.to_string())),
        )
    }
}
