//! Dashboard statistics handler

use axum::{extract::State, Json};
use shared::types::DashboardStats;

use crate::error::AppResult;
use crate::services::StatsService;
use crate::AppState;

/// Counters shown on the dashboard
pub async fn get_dashboard_stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let service = StatsService::new(state.db);
    Ok(Json(service.dashboard().await?))
}
