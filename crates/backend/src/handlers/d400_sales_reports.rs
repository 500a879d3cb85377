use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::dashboards::d400_sales_reports::{ReportFilter, ReportKind};

use super::error_status;
use crate::dashboards::d400_sales_reports::service;
use crate::shared::data::db::get_connection;

/// GET /api/reports/:report_type?emp_id=
///
/// Unknown report types answer with an empty array.
pub async fn get_report(
    Path(report_type): Path<String>,
    Query(filter): Query<ReportFilter>,
) -> Result<Response, StatusCode> {
    let Some(kind) = ReportKind::parse(&report_type, filter.emp_id.as_deref()) else {
        tracing::warn!("Unknown report type: {}", report_type);
        return Ok(Json(Vec::<()>::new()).into_response());
    };

    match service::compute_report(get_connection(), kind).await {
        Ok(result) => Ok(Json(result).into_response()),
        Err(e) => Err(error_status(&format!("report {}", kind.type_code()), e)),
    }
}
