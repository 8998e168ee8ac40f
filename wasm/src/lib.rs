//! WebAssembly module for the K2N service
//!
//! Provides client-side computation for:
//! - Period reports over ledger records
//! - Remaining stock per article
//! - Stock status classification

use wasm_bindgen::prelude::*;

use shared::models::{Record, StockStatus};
use shared::reporting::{self, ReportRequest};

/// Aggregate `records_json` (an array of records) for the report described by `request_json`
#[wasm_bindgen]
pub fn build_report(records_json: &str, request_json: &str) -> Result<String, JsValue> {
    report_json(records_json, request_json).map_err(|e| JsValue::from_str(&e))
}

/// Compute remaining stock per article from acquisition and exit records
#[wasm_bindgen]
pub fn build_stock_report(
    acquisitions_json: &str,
    exits_json: &str,
    request_json: &str,
) -> Result<String, JsValue> {
    stock_report_json(acquisitions_json, exits_json, request_json)
        .map_err(|e| JsValue::from_str(&e))
}

/// Classify a stock level against its minimum threshold
#[wasm_bindgen]
pub fn stock_status(quantite: i32, seuil_min: i32) -> String {
    StockStatus::classify(quantite, seuil_min).to_string()
}

fn report_json(records_json: &str, request_json: &str) -> Result<String, String> {
    let records = parse_records(records_json)?;
    let request = parse_request(request_json)?;

    let buckets = reporting::report(&records, &request).map_err(|e| e.to_string())?;
    serde_json::to_string(&buckets).map_err(|e| format!("Failed to encode report: {}", e))
}

fn stock_report_json(
    acquisitions_json: &str,
    exits_json: &str,
    request_json: &str,
) -> Result<String, String> {
    let acquisitions = parse_records(acquisitions_json)?;
    let exits = parse_records(exits_json)?;
    let request = parse_request(request_json)?;

    let lines =
        reporting::stock_report(&acquisitions, &exits, &request).map_err(|e| e.to_string())?;
    serde_json::to_string(&lines).map_err(|e| format!("Failed to encode stock report: {}", e))
}

fn parse_records(json: &str) -> Result<Vec<Record>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid records JSON: {}", e))
}

fn parse_request(json: &str) -> Result<ReportRequest, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid request JSON: {}", e))
}
