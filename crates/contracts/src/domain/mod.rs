pub mod a001_employee;
pub mod a002_product;
pub mod a003_sale;
pub mod a004_saved_report;
