//! HTTP handlers for funds endpoints

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use shared::models::Fond;
use shared::reporting::{Bucket, ReportRequest};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::fond::CreateFondInput;
use crate::services::{FondService, ReportingService};
use crate::AppState;

/// Record received funds
pub async fn create_fond(
    State(state): State<AppState>,
    Json(input): Json<CreateFondInput>,
) -> AppResult<(StatusCode, Json<Fond>)> {
    let service = FondService::new(state.db);
    let fond = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(fond)))
}

/// List all funds
pub async fn list_fonds(State(state): State<AppState>) -> AppResult<Json<Vec<Fond>>> {
    let service = FondService::new(state.db);
    Ok(Json(service.list().await?))
}

/// Get a funds entry by ID
pub async fn get_fond(
    State(state): State<AppState>,
    Path(fond_id): Path<Uuid>,
) -> AppResult<Json<Fond>> {
    let service = FondService::new(state.db);
    Ok(Json(service.get(fond_id).await?))
}

/// Delete a funds entry
pub async fn delete_fond(
    State(state): State<AppState>,
    Path(fond_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = FondService::new(state.db);
    service.delete(fond_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Funds received per period, the statement shown on the funds page
pub async fn fonds_report(
    State(state): State<AppState>,
    query: Result<Query<ReportRequest>, QueryRejection>,
) -> AppResult<Json<Vec<Bucket>>> {
    let Query(request) = query?;
    let service = ReportingService::new(state.db);
    Ok(Json(service.funds_report(&request).await?))
}
