use axum::{http::StatusCode, Json};
use contracts::domain::a004_saved_report::aggregate::{SavedReport, SavedReportDto};
use serde_json::json;

use super::error_status;
use crate::domain::a004_saved_report;
use crate::shared::data::db::get_connection;

/// GET /api/saved-reports
pub async fn list_all() -> Result<Json<Vec<SavedReport>>, StatusCode> {
    match a004_saved_report::service::list_all(get_connection()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(error_status("list saved reports", e)),
    }
}

/// POST /api/saved-reports
pub async fn create(
    Json(dto): Json<SavedReportDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    match a004_saved_report::service::create(get_connection(), dto).await {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => Err(error_status("save report", e)),
    }
}
