//! Route definitions for the K2N service API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/sales", sale_routes())
        .nest("/acquisitions", acquisition_routes())
        .nest("/sorties", sortie_routes())
        .nest("/fonds", fond_routes())
        .nest("/stocks", stock_routes())
        .route(
            "/contact",
            get(handlers::list_contacts).post(handlers::submit_contact),
        )
        .route("/stats", get(handlers::get_dashboard_stats))
}

/// Sales routes
fn sale_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_sales).post(handlers::create_sale))
        .route("/rapport", get(handlers::sales_report))
        .route(
            "/:sale_id",
            get(handlers::get_sale).delete(handlers::delete_sale),
        )
}

/// Acquisition routes
fn acquisition_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_acquisitions).post(handlers::create_acquisition),
        )
        .route("/rapport", get(handlers::acquisitions_report))
        .route(
            "/:acquisition_id",
            get(handlers::get_acquisition).delete(handlers::delete_acquisition),
        )
}

/// Stock exit routes
fn sortie_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_sorties).post(handlers::create_sortie))
        .route("/rapport", get(handlers::sorties_report))
        .route(
            "/:sortie_id",
            get(handlers::get_sortie).delete(handlers::delete_sortie),
        )
}

/// Funds routes
fn fond_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_fonds).post(handlers::create_fond))
        .route("/rapport", get(handlers::fonds_report))
        .route(
            "/:fond_id",
            get(handlers::get_fond).delete(handlers::delete_fond),
        )
}

/// Stock routes
fn stock_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_stocks).post(handlers::create_stock))
        .route("/rapport", get(handlers::stock_report))
        .route(
            "/:stock_id",
            get(handlers::get_stock).delete(handlers::delete_stock),
        )
}
