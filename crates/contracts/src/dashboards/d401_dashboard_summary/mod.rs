use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dashboards::d400_sales_reports::SalesLedgerRow;

/// Number of most recent sales shown on the dashboard
pub const RECENT_SALES_LIMIT: usize = 5;

/// Dashboard snapshot: counts, grand total and the latest activity.
///
/// `Default` is the all-zero summary returned when the store cannot be read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub employee_count: i64,
    pub product_count: i64,
    pub sale_count: i64,
    pub total_sales: Decimal,
    pub recent_sales: Vec<SalesLedgerRow>,
}
