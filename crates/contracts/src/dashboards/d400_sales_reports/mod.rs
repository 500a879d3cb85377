use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum number of entries in every "top N" ranking
pub const TOP_N: usize = 5;

// ============================================================================
// Request
// ============================================================================

/// One of the six canned sales reports.
///
/// The wire format selects a report with the tags `"1"`..`"6"`; only the sales
/// ledger accepts a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// 1: number of sale rows per employee
    EmployeeSalesCount,
    /// 2: total quantity sold per product
    ProductSalesVolume,
    /// 3: average quantity per sale, per employee
    EmployeeAvgQuantity,
    /// 4: average quantity per sale, per product
    ProductAvgQuantity,
    /// 5: per-sale ledger, optionally restricted to one employee
    SalesLedger { emp_id: Option<i64> },
    /// 6: top products by sales amount
    TopSellingProducts,
}

impl ReportKind {
    /// Parse the wire tags. Unknown tags yield `None`.
    ///
    /// `emp_id` is only looked at for the ledger. Blank, non-numeric and
    /// zero values mean "all employees".
    pub fn parse(report_type: &str, emp_id: Option<&str>) -> Option<Self> {
        match report_type.trim() {
            "1" => Some(Self::EmployeeSalesCount),
            "2" => Some(Self::ProductSalesVolume),
            "3" => Some(Self::EmployeeAvgQuantity),
            "4" => Some(Self::ProductAvgQuantity),
            "5" => Some(Self::SalesLedger {
                emp_id: parse_emp_filter(emp_id),
            }),
            "6" => Some(Self::TopSellingProducts),
            _ => None,
        }
    }

    pub fn type_code(&self) -> u8 {
        match self {
            Self::EmployeeSalesCount => 1,
            Self::ProductSalesVolume => 2,
            Self::EmployeeAvgQuantity => 3,
            Self::ProductAvgQuantity => 4,
            Self::SalesLedger { .. } => 5,
            Self::TopSellingProducts => 6,
        }
    }

    /// Human readable report title
    pub fn title(&self) -> &'static str {
        match self {
            Self::EmployeeSalesCount => "Sales count per employee",
            Self::ProductSalesVolume => "Sales quantity per product",
            Self::EmployeeAvgQuantity => "Average sales quantity per employee",
            Self::ProductAvgQuantity => "Average sales quantity per product",
            Self::SalesLedger { .. } => "Employee sales records",
            Self::TopSellingProducts => "Top selling products",
        }
    }
}

fn parse_emp_filter(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|id| *id != 0)
}

/// Query string of `GET /api/reports/:report_type`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportFilter {
    pub emp_id: Option<String>,
}

// ============================================================================
// Rows
// ============================================================================

/// Report 1 row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSalesCount {
    #[serde(rename = "Employee ID")]
    pub emp_id: Option<i64>,
    #[serde(rename = "Employee Name")]
    pub emp_name: Option<String>,
    #[serde(rename = "Sales Count")]
    pub sales_count: i64,
}

/// Report 2 row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSalesVolume {
    #[serde(rename = "Product ID")]
    pub product_id: Option<i64>,
    #[serde(rename = "Product Name")]
    pub product_name: Option<String>,
    #[serde(rename = "Sales Quantity")]
    pub total_quantity: i64,
}

/// Report 3 row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeAvgQuantity {
    #[serde(rename = "Employee ID")]
    pub emp_id: Option<i64>,
    #[serde(rename = "Employee Name")]
    pub emp_name: Option<String>,
    #[serde(rename = "Average Sales Quantity")]
    pub avg_quantity: Decimal,
}

/// Report 4 row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAvgQuantity {
    #[serde(rename = "Product ID")]
    pub product_id: Option<i64>,
    #[serde(rename = "Product Name")]
    pub product_name: Option<String>,
    #[serde(rename = "Average Sales Quantity")]
    pub avg_quantity: Decimal,
}

/// One sale with resolved names and derived amount.
/// Used by report 5 and by the dashboard's recent sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesLedgerRow {
    #[serde(rename = "Sale ID")]
    pub sale_id: i64,
    #[serde(rename = "Employee Name")]
    pub emp_name: Option<String>,
    #[serde(rename = "Product Name")]
    pub product_name: Option<String>,
    #[serde(rename = "Sales Quantity")]
    pub quantity: i64,
    #[serde(rename = "Sale Date")]
    pub sale_date: NaiveDate,
    #[serde(rename = "Sales Amount")]
    pub amount: Decimal,
}

/// Product ranked inside an employee's statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    #[serde(rename = "Product Name")]
    pub product_name: Option<String>,
    #[serde(rename = "Sales Amount")]
    pub total_amount: Decimal,
    #[serde(rename = "Sales Quantity")]
    pub total_quantity: i64,
}

/// Aggregates over one employee's sales
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmployeeStatsSummary {
    /// Mean sale amount, 2 decimals; zero when the employee has no sales
    pub average: Decimal,
    pub total: Decimal,
    pub count: i64,
    pub top_products: Vec<TopProduct>,
}

/// Report 6 row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSellingProduct {
    #[serde(rename = "Product ID")]
    pub product_id: Option<i64>,
    #[serde(rename = "Product Name")]
    pub product_name: Option<String>,
    #[serde(rename = "Sales Quantity")]
    pub total_quantity: i64,
    #[serde(rename = "Sales Amount")]
    pub total_amount: Decimal,
}

// ============================================================================
// Responses
// ============================================================================

/// Report 5 payload. `stats` is `null` unless an employee filter was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesLedgerReport {
    pub data: Vec<SalesLedgerRow>,
    pub stats: Option<EmployeeStatsSummary>,
}

/// Report 6 payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSellingReport {
    pub data: Vec<TopSellingProduct>,
    /// Mean of per-product total amount over every product with sales
    pub average: Decimal,
}

/// Result of any report. Reports 1-4 serialize as a plain array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportResult {
    EmployeeSalesCount(Vec<EmployeeSalesCount>),
    ProductSalesVolume(Vec<ProductSalesVolume>),
    EmployeeAvgQuantity(Vec<EmployeeAvgQuantity>),
    ProductAvgQuantity(Vec<ProductAvgQuantity>),
    SalesLedger(SalesLedgerReport),
    TopSellingProducts(TopSellingReport),
}

impl ReportResult {
    /// Number of data rows
    pub fn row_count(&self) -> usize {
        match self {
            Self::EmployeeSalesCount(rows) => rows.len(),
            Self::ProductSalesVolume(rows) => rows.len(),
            Self::EmployeeAvgQuantity(rows) => rows.len(),
            Self::ProductAvgQuantity(rows) => rows.len(),
            Self::SalesLedger(report) => report.data.len(),
            Self::TopSellingProducts(report) => report.data.len(),
        }
    }
}
