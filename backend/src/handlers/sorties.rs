//! HTTP handlers for stock exit endpoints

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use shared::models::Sortie;
use shared::reporting::{Bucket, ReportRequest};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::sortie::CreateSortieInput;
use crate::services::{ReportingService, SortieService};
use crate::AppState;

/// Record a stock exit
pub async fn create_sortie(
    State(state): State<AppState>,
    Json(input): Json<CreateSortieInput>,
) -> AppResult<(StatusCode, Json<Sortie>)> {
    let service = SortieService::new(state.db);
    let sortie = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(sortie)))
}

/// List all stock exits
pub async fn list_sorties(State(state): State<AppState>) -> AppResult<Json<Vec<Sortie>>> {
    let service = SortieService::new(state.db);
    Ok(Json(service.list().await?))
}

/// Get a stock exit by ID
pub async fn get_sortie(
    State(state): State<AppState>,
    Path(sortie_id): Path<Uuid>,
) -> AppResult<Json<Sortie>> {
    let service = SortieService::new(state.db);
    Ok(Json(service.get(sortie_id).await?))
}

/// Delete a stock exit
pub async fn delete_sortie(
    State(state): State<AppState>,
    Path(sortie_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = SortieService::new(state.db);
    service.delete(sortie_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Exited quantities per period
pub async fn sorties_report(
    State(state): State<AppState>,
    query: Result<Query<ReportRequest>, QueryRejection>,
) -> AppResult<Json<Vec<Bucket>>> {
    let Query(request) = query?;
    let service = ReportingService::new(state.db);
    Ok(Json(service.exits_report(&request).await?))
}
