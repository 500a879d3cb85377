use anyhow::Result;
use contracts::dashboards::d401_dashboard_summary::{DashboardSummary, RECENT_SALES_LIMIT};
use contracts::shared::money;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::dashboards::d400_sales_reports;

/// Dashboard summary. Never fails: when the store cannot be read the error is
/// logged and the all-zero summary is returned.
pub async fn compute_dashboard_summary(db: &DatabaseConnection) -> DashboardSummary {
    match build_summary(db).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Failed to compute dashboard summary: {}", e);
            DashboardSummary::default()
        }
    }
}

async fn build_summary(db: &DatabaseConnection) -> Result<DashboardSummary> {
    let employee_count = repository::employee_count(db).await?;
    let product_count = repository::product_count(db).await?;
    let sale_count = repository::sale_count(db).await?;
    let total_sales = money::from_cents(repository::total_sales_cents(db).await?);

    let recent_sales = d400_sales_reports::repository::sales_ledger(
        db,
        None,
        Some(RECENT_SALES_LIMIT as i64),
    )
    .await?
    .into_iter()
    .map(d400_sales_reports::service::into_ledger_row)
    .collect();

    Ok(DashboardSummary {
        employee_count,
        product_count,
        sale_count,
        total_sales,
        recent_sales,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::{insert_sale, memory_db, seed_basic_scenario};
    use rust_decimal::Decimal;
    use sea_orm::{ConnectOptions, Database};

    #[tokio::test]
    async fn test_summary_of_basic_scenario() {
        let db = memory_db().await;
        seed_basic_scenario(&db).await;

        let summary = compute_dashboard_summary(&db).await;
        assert_eq!(summary.employee_count, 2);
        assert_eq!(summary.product_count, 3);
        assert_eq!(summary.sale_count, 3);
        assert_eq!(summary.total_sales, Decimal::new(9000, 2));

        let ids: Vec<_> = summary.recent_sales.iter().map(|r| r.sale_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn test_recent_sales_are_limited() {
        let db = memory_db().await;
        seed_basic_scenario(&db).await;
        for id in 4..=8 {
            insert_sale(&db, id, 1, 1, 1, &format!("2024-02-0{}", id)).await;
        }

        let summary = compute_dashboard_summary(&db).await;
        assert_eq!(summary.sale_count, 8);
        let ids: Vec<_> = summary.recent_sales.iter().map(|r| r.sale_id).collect();
        assert_eq!(ids, vec![8, 7, 6, 5, 4]);
    }

    #[tokio::test]
    async fn test_empty_store_gives_zero_summary() {
        let db = memory_db().await;
        assert_eq!(compute_dashboard_summary(&db).await, DashboardSummary::default());
    }

    #[tokio::test]
    async fn test_unreadable_store_degrades_to_zero_summary() {
        // no schema at all: every query fails
        let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
        opts.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opts).await.unwrap();

        assert_eq!(compute_dashboard_summary(&db).await, DashboardSummary::default());
    }
}
