//! HTTP handlers for sales endpoints

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use shared::models::Sale;
use shared::reporting::{Bucket, ReportRequest};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::sale::CreateSaleInput;
use crate::services::{ReportingService, SaleService};
use crate::AppState;

/// Record a sale
pub async fn create_sale(
    State(state): State<AppState>,
    Json(input): Json<CreateSaleInput>,
) -> AppResult<(StatusCode, Json<Sale>)> {
    let service = SaleService::new(state.db);
    let sale = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(sale)))
}

/// List all sales
pub async fn list_sales(State(state): State<AppState>) -> AppResult<Json<Vec<Sale>>> {
    let service = SaleService::new(state.db);
    Ok(Json(service.list().await?))
}

/// Get a sale by ID
pub async fn get_sale(
    State(state): State<AppState>,
    Path(sale_id): Path<Uuid>,
) -> AppResult<Json<Sale>> {
    let service = SaleService::new(state.db);
    Ok(Json(service.get(sale_id).await?))
}

/// Delete a sale
pub async fn delete_sale(
    State(state): State<AppState>,
    Path(sale_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = SaleService::new(state.db);
    service.delete(sale_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Net sales per day, day of month or month
pub async fn sales_report(
    State(state): State<AppState>,
    query: Result<Query<ReportRequest>, QueryRejection>,
) -> AppResult<Json<Vec<Bucket>>> {
    let Query(request) = query?;
    let service = ReportingService::new(state.db);
    Ok(Json(service.sales_report(&request).await?))
}
