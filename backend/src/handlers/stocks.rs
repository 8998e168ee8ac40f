//! HTTP handlers for stock endpoints

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use shared::models::StockItem;
use shared::reporting::{ReportRequest, StockLine};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::stock::CreateStockInput;
use crate::services::{ReportingService, StockService};
use crate::AppState;

/// Register a stock item
pub async fn create_stock(
    State(state): State<AppState>,
    Json(input): Json<CreateStockInput>,
) -> AppResult<(StatusCode, Json<StockItem>)> {
    let service = StockService::new(state.db);
    let item = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// List stock items with their status
pub async fn list_stocks(State(state): State<AppState>) -> AppResult<Json<Vec<StockItem>>> {
    let service = StockService::new(state.db);
    Ok(Json(service.list().await?))
}

/// Get a stock item by ID
pub async fn get_stock(
    State(state): State<AppState>,
    Path(stock_id): Path<Uuid>,
) -> AppResult<Json<StockItem>> {
    let service = StockService::new(state.db);
    Ok(Json(service.get(stock_id).await?))
}

/// Delete a stock item
pub async fn delete_stock(
    State(state): State<AppState>,
    Path(stock_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = StockService::new(state.db);
    service.delete(stock_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remaining stock per article over a report window
pub async fn stock_report(
    State(state): State<AppState>,
    query: Result<Query<ReportRequest>, QueryRejection>,
) -> AppResult<Json<Vec<StockLine>>> {
    let Query(request) = query?;
    let service = ReportingService::new(state.db);
    Ok(Json(service.stock_report(&request).await?))
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use crate::{create_app, test_state};

    #[tokio::test]
    async fn test_stock_report_rejects_unknown_type() {
        let app = create_app(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/stocks/rapport?type=semaine")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_stock_report_rejects_reversed_range() {
        let app = create_app(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/stocks/rapport?type=periode&start=2024-02-01&end=2024-01-01")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
