//! Dashboard aggregation endpoint.

use axum::{extract::State, Json};

use super::common::{ApiResponse, ApiResult};
use crate::summary::{summarize, DashboardSummary};
use crate::web::AppState;

pub async fn get_dashboard_summary(State(state): State<AppState>) -> ApiResult<DashboardSummary> {
    let services = state.registry.list().await;
    Ok(Json(ApiResponse::success(summarize(&services))))
}
