pub mod a001_employee;
pub mod a002_product;
pub mod a003_sale;
pub mod a004_saved_report;
pub mod d400_sales_reports;
pub mod d401_dashboard_summary;
pub mod legacy_dispatch;
pub mod logs;

use axum::http::StatusCode;

use crate::shared::error::ServiceError;

/// Log a failed service call and turn it into a response status
pub(crate) fn error_status(context: &str, e: ServiceError) -> StatusCode {
    let status = e.status_code();
    if status.is_server_error() {
        tracing::error!("{}: {}", context, e);
    } else {
        tracing::warn!("{}: {}", context, e);
    }
    status
}
