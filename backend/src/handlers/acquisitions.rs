//! HTTP handlers for acquisition endpoints

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use shared::models::Acquisition;
use shared::reporting::{Bucket, ReportRequest};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::acquisition::CreateAcquisitionInput;
use crate::services::{AcquisitionService, ReportingService};
use crate::AppState;

/// Record an acquisition
pub async fn create_acquisition(
    State(state): State<AppState>,
    Json(input): Json<CreateAcquisitionInput>,
) -> AppResult<(StatusCode, Json<Acquisition>)> {
    let service = AcquisitionService::new(state.db);
    let acquisition = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(acquisition)))
}

/// List all acquisitions
pub async fn list_acquisitions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Acquisition>>> {
    let service = AcquisitionService::new(state.db);
    Ok(Json(service.list().await?))
}

/// Get an acquisition by ID
pub async fn get_acquisition(
    State(state): State<AppState>,
    Path(acquisition_id): Path<Uuid>,
) -> AppResult<Json<Acquisition>> {
    let service = AcquisitionService::new(state.db);
    Ok(Json(service.get(acquisition_id).await?))
}

/// Delete an acquisition
pub async fn delete_acquisition(
    State(state): State<AppState>,
    Path(acquisition_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = AcquisitionService::new(state.db);
    service.delete(acquisition_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Acquisition costs per period
pub async fn acquisitions_report(
    State(state): State<AppState>,
    query: Result<Query<ReportRequest>, QueryRejection>,
) -> AppResult<Json<Vec<Bucket>>> {
    let Query(request) = query?;
    let service = ReportingService::new(state.db);
    Ok(Json(service.acquisitions_report(&request).await?))
}
