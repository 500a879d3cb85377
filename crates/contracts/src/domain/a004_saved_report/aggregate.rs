use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Запись о сохранённом отчёте (имя и дата формирования)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedReport {
    pub report_id: i64,
    pub report_name: String,
    pub report_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedReportDto {
    pub report_name: String,
    pub report_date: NaiveDate,
}

impl SavedReportDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.report_name.trim().is_empty() {
            return Err("Report name must not be empty".into());
        }
        Ok(())
    }
}
