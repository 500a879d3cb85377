pub mod d400_sales_reports;
pub mod d401_dashboard_summary;
