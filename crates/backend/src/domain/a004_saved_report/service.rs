use contracts::domain::a004_saved_report::aggregate::{SavedReport, SavedReportDto};
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::logger;

pub async fn list_all(db: &DatabaseConnection) -> ServiceResult<Vec<SavedReport>> {
    Ok(repository::list_all(db).await?)
}

pub async fn create(db: &DatabaseConnection, dto: SavedReportDto) -> ServiceResult<i64> {
    dto.validate().map_err(ServiceError::Validation)?;

    let id = repository::insert(db, &dto).await?;
    logger::log(
        "reports",
        &format!("Report '{}' saved for {}", dto.report_name.trim(), dto.report_date),
    );
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::memory_db;
    use chrono::NaiveDate;

    fn dto(name: &str, day: u32) -> SavedReportDto {
        SavedReportDto {
            report_name: name.into(),
            report_date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_saved_reports_newest_first() {
        let db = memory_db().await;
        create(&db, dto("March close", 1)).await.unwrap();
        create(&db, dto("Mid month", 15)).await.unwrap();

        let reports = list_all(&db).await.unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].report_name, "Mid month");
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let db = memory_db().await;
        assert!(matches!(
            create(&db, dto("  ", 1)).await,
            Err(ServiceError::Validation(_))
        ));
    }
}
