use axum::Json;
use contracts::dashboards::d401_dashboard_summary::DashboardSummary;

use crate::dashboards::d401_dashboard_summary::service;
use crate::shared::data::db::get_connection;

/// GET /api/dashboard
pub async fn get_summary() -> Json<DashboardSummary> {
    Json(service::compute_dashboard_summary(get_connection()).await)
}
