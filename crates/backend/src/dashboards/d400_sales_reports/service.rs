use contracts::dashboards::d400_sales_reports::{
    EmployeeAvgQuantity, EmployeeSalesCount, EmployeeStatsSummary, ProductAvgQuantity,
    ProductSalesVolume, ReportKind, ReportResult, SalesLedgerReport, SalesLedgerRow,
    TopProduct, TopSellingProduct, TopSellingReport, TOP_N,
};
use contracts::shared::money;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use super::repository::{self, LedgerRow};
use crate::shared::error::ServiceResult;

/// Compute one report against the current contents of the store.
///
/// Reports are read-only: running the same report twice without writes in
/// between returns the same result.
pub async fn compute_report(
    db: &DatabaseConnection,
    kind: ReportKind,
) -> ServiceResult<ReportResult> {
    let result = match kind {
        ReportKind::EmployeeSalesCount => {
            ReportResult::EmployeeSalesCount(employee_sales_count(db).await?)
        }
        ReportKind::ProductSalesVolume => {
            ReportResult::ProductSalesVolume(product_sales_volume(db).await?)
        }
        ReportKind::EmployeeAvgQuantity => {
            ReportResult::EmployeeAvgQuantity(employee_avg_quantity(db).await?)
        }
        ReportKind::ProductAvgQuantity => {
            ReportResult::ProductAvgQuantity(product_avg_quantity(db).await?)
        }
        ReportKind::SalesLedger { emp_id } => {
            ReportResult::SalesLedger(sales_ledger(db, emp_id).await?)
        }
        ReportKind::TopSellingProducts => {
            ReportResult::TopSellingProducts(top_selling_products(db).await?)
        }
    };

    tracing::debug!(
        "Report {} ({}) computed: {} rows",
        kind.type_code(),
        kind.title(),
        result.row_count()
    );
    Ok(result)
}

async fn employee_sales_count(db: &DatabaseConnection) -> ServiceResult<Vec<EmployeeSalesCount>> {
    let rows = repository::employee_sales_count(db).await?;
    Ok(rows
        .into_iter()
        .map(|r| EmployeeSalesCount {
            emp_id: r.emp_id,
            emp_name: r.emp_name,
            sales_count: r.sales_count,
        })
        .collect())
}

async fn product_sales_volume(db: &DatabaseConnection) -> ServiceResult<Vec<ProductSalesVolume>> {
    let rows = repository::product_sales_volume(db).await?;
    Ok(rows
        .into_iter()
        .map(|r| ProductSalesVolume {
            product_id: r.product_id,
            product_name: r.product_name,
            total_quantity: r.total_quantity,
        })
        .collect())
}

async fn employee_avg_quantity(db: &DatabaseConnection) -> ServiceResult<Vec<EmployeeAvgQuantity>> {
    let rows = repository::employee_quantity_stats(db).await?;
    Ok(rows
        .into_iter()
        .map(|r| EmployeeAvgQuantity {
            emp_id: r.id,
            emp_name: r.name,
            avg_quantity: money::mean_quantity(r.total_quantity, r.sales_count),
        })
        .collect())
}

async fn product_avg_quantity(db: &DatabaseConnection) -> ServiceResult<Vec<ProductAvgQuantity>> {
    let rows = repository::product_quantity_stats(db).await?;
    Ok(rows
        .into_iter()
        .map(|r| ProductAvgQuantity {
            product_id: r.id,
            product_name: r.name,
            avg_quantity: money::mean_quantity(r.total_quantity, r.sales_count),
        })
        .collect())
}

/// Ledger rows for everyone, or for one employee together with their stats.
///
/// An employee with no sales (or an id nobody has) gets an empty ledger and
/// all-zero stats.
async fn sales_ledger(
    db: &DatabaseConnection,
    emp_id: Option<i64>,
) -> ServiceResult<SalesLedgerReport> {
    let data = repository::sales_ledger(db, emp_id, None)
        .await?
        .into_iter()
        .map(into_ledger_row)
        .collect();

    let stats = match emp_id {
        Some(emp_id) => Some(employee_stats(db, emp_id).await?),
        None => None,
    };

    Ok(SalesLedgerReport { data, stats })
}

async fn employee_stats(
    db: &DatabaseConnection,
    emp_id: i64,
) -> ServiceResult<EmployeeStatsSummary> {
    let totals = repository::employee_amount_totals(db, emp_id).await?;
    let top = repository::employee_top_products(db, emp_id, TOP_N as i64).await?;

    let total = money::from_cents(totals.total_cents);
    Ok(EmployeeStatsSummary {
        // per priced sale; a sale of a missing product has no amount
        average: money::round_money(money::mean(total, totals.priced_count)),
        total,
        count: totals.sales_count,
        top_products: top
            .into_iter()
            .map(|r| TopProduct {
                product_name: r.product_name,
                total_amount: money::from_cents(r.total_cents),
                total_quantity: r.total_quantity,
            })
            .collect(),
    })
}

async fn top_selling_products(db: &DatabaseConnection) -> ServiceResult<TopSellingReport> {
    let data = repository::top_selling_products(db, TOP_N as i64)
        .await?
        .into_iter()
        .map(|r| TopSellingProduct {
            product_id: r.product_id,
            product_name: r.product_name,
            total_quantity: r.total_quantity,
            total_amount: money::from_cents(r.total_cents),
        })
        .collect();

    // The average covers every sold product, not just the ones listed
    let totals = repository::product_amount_totals(db).await?;

    Ok(TopSellingReport {
        data,
        average: average_of_totals(&totals),
    })
}

/// Mean of per-product totals given in cents, rounded to cents
pub fn average_of_totals(totals_cents: &[i64]) -> Decimal {
    let sum: Decimal = totals_cents.iter().copied().map(money::from_cents).sum();
    money::round_money(money::mean(sum, totals_cents.len() as i64))
}

pub(crate) fn into_ledger_row(r: LedgerRow) -> SalesLedgerRow {
    SalesLedgerRow {
        sale_id: r.sale_id,
        emp_name: r.emp_name,
        product_name: r.product_name,
        quantity: r.quantity,
        sale_date: r.sale_date,
        amount: money::from_cents(r.amount_cents),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::{
        insert_employee, insert_product, insert_sale, memory_db, seed_basic_scenario,
    };
    use chrono::NaiveDate;

    fn cents(c: i64) -> Decimal {
        money::from_cents(c)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    async fn run(db: &DatabaseConnection, tag: &str, emp_id: Option<&str>) -> ReportResult {
        let kind = ReportKind::parse(tag, emp_id).unwrap();
        compute_report(db, kind).await.unwrap()
    }

    // ========================================================================
    // Reports 1-4
    // ========================================================================

    #[tokio::test]
    async fn test_employee_sales_count() {
        let db = memory_db().await;
        seed_basic_scenario(&db).await;

        let ReportResult::EmployeeSalesCount(rows) = run(&db, "1", None).await else {
            panic!("wrong report shape");
        };
        let got: Vec<_> = rows
            .iter()
            .map(|r| (r.emp_id, r.emp_name.as_deref(), r.sales_count))
            .collect();
        assert_eq!(got, vec![(Some(1), Some("Alice"), 2), (Some(2), Some("Bob"), 1)]);
    }

    #[tokio::test]
    async fn test_product_sales_volume_ordered_by_quantity() {
        let db = memory_db().await;
        seed_basic_scenario(&db).await;

        let ReportResult::ProductSalesVolume(rows) = run(&db, "2", None).await else {
            panic!("wrong report shape");
        };
        let got: Vec<_> = rows
            .iter()
            .map(|r| (r.product_id, r.total_quantity))
            .collect();
        // the unsold Gizmo does not appear
        assert_eq!(got, vec![(Some(1), 7), (Some(2), 1)]);
    }

    #[tokio::test]
    async fn test_product_sales_volume_tie_breaks_on_id() {
        let db = memory_db().await;
        insert_employee(&db, 1, "Alice").await;
        insert_product(&db, 1, "A", 100).await;
        insert_product(&db, 2, "B", 100).await;
        insert_sale(&db, 1, 1, 2, 3, "2024-02-01").await;
        insert_sale(&db, 2, 1, 1, 3, "2024-02-02").await;

        let ReportResult::ProductSalesVolume(rows) = run(&db, "2", None).await else {
            panic!("wrong report shape");
        };
        let ids: Vec<_> = rows.iter().map(|r| r.product_id).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
    }

    #[tokio::test]
    async fn test_employee_avg_quantity() {
        let db = memory_db().await;
        seed_basic_scenario(&db).await;

        let ReportResult::EmployeeAvgQuantity(rows) = run(&db, "3", None).await else {
            panic!("wrong report shape");
        };
        // Bob: 5/1, Alice: 3/2
        let got: Vec<_> = rows.iter().map(|r| (r.emp_id, r.avg_quantity)).collect();
        assert_eq!(
            got,
            vec![(Some(2), Decimal::from(5)), (Some(1), Decimal::new(15, 1))]
        );
    }

    #[tokio::test]
    async fn test_product_avg_quantity_is_rounded() {
        let db = memory_db().await;
        seed_basic_scenario(&db).await;
        insert_sale(&db, 4, 2, 2, 1, "2024-01-13").await;
        insert_sale(&db, 5, 2, 2, 2, "2024-01-14").await;

        let ReportResult::ProductAvgQuantity(rows) = run(&db, "4", None).await else {
            panic!("wrong report shape");
        };
        // Widget: 7/2 = 3.5, Gadget: 4/3 = 1.3333
        let got: Vec<_> = rows
            .iter()
            .map(|r| (r.product_name.as_deref(), r.avg_quantity))
            .collect();
        assert_eq!(
            got,
            vec![
                (Some("Widget"), Decimal::new(35, 1)),
                (Some("Gadget"), Decimal::new(13333, 4)),
            ]
        );
    }

    #[tokio::test]
    async fn test_reports_on_empty_store() {
        let db = memory_db().await;

        for tag in ["1", "2", "3", "4"] {
            let value = serde_json::to_value(run(&db, tag, None).await).unwrap();
            assert_eq!(value, serde_json::json!([]), "report {}", tag);
        }

        let ReportResult::TopSellingProducts(report) = run(&db, "6", None).await else {
            panic!("wrong report shape");
        };
        assert!(report.data.is_empty());
        assert_eq!(report.average, Decimal::ZERO);
    }

    // ========================================================================
    // Report 5
    // ========================================================================

    #[tokio::test]
    async fn test_ledger_without_filter() {
        let db = memory_db().await;
        seed_basic_scenario(&db).await;

        let ReportResult::SalesLedger(report) = run(&db, "5", None).await else {
            panic!("wrong report shape");
        };
        assert!(report.stats.is_none());

        let ids: Vec<_> = report.data.iter().map(|r| r.sale_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        let first = &report.data[0];
        assert_eq!(first.emp_name.as_deref(), Some("Alice"));
        assert_eq!(first.product_name.as_deref(), Some("Gadget"));
        assert_eq!(first.sale_date, date("2024-01-12"));
        assert_eq!(first.amount, cents(2000));
    }

    #[tokio::test]
    async fn test_ledger_same_day_ordered_by_id_desc() {
        let db = memory_db().await;
        seed_basic_scenario(&db).await;
        insert_sale(&db, 4, 2, 2, 1, "2024-01-12").await;

        let ReportResult::SalesLedger(report) = run(&db, "5", None).await else {
            panic!("wrong report shape");
        };
        let ids: Vec<_> = report.data.iter().map(|r| r.sale_id).collect();
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }

    #[tokio::test]
    async fn test_ledger_with_filter_has_stats() {
        let db = memory_db().await;
        seed_basic_scenario(&db).await;

        let ReportResult::SalesLedger(report) = run(&db, "5", Some("1")).await else {
            panic!("wrong report shape");
        };
        let ids: Vec<_> = report.data.iter().map(|r| r.sale_id).collect();
        assert_eq!(ids, vec![2, 1]);

        let stats = report.stats.unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total, cents(4000));
        assert_eq!(stats.average, cents(2000));

        // equal amounts: lower product id first
        let top: Vec<_> = stats
            .top_products
            .iter()
            .map(|p| (p.product_name.as_deref(), p.total_amount, p.total_quantity))
            .collect();
        assert_eq!(
            top,
            vec![
                (Some("Widget"), cents(2000), 2),
                (Some("Gadget"), cents(2000), 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_ledger_for_employee_without_sales() {
        let db = memory_db().await;
        seed_basic_scenario(&db).await;
        insert_employee(&db, 3, "Carol").await;

        for emp in ["3", "99", "-1"] {
            let ReportResult::SalesLedger(report) = run(&db, "5", Some(emp)).await else {
                panic!("wrong report shape");
            };
            assert!(report.data.is_empty());
            assert_eq!(report.stats, Some(EmployeeStatsSummary::default()));
        }
    }

    #[tokio::test]
    async fn test_ledger_average_is_rounded() {
        let db = memory_db().await;
        insert_employee(&db, 1, "Alice").await;
        insert_product(&db, 1, "Pen", 1).await;
        insert_sale(&db, 1, 1, 1, 1, "2024-03-01").await;
        insert_sale(&db, 2, 1, 1, 1, "2024-03-02").await;
        insert_sale(&db, 3, 1, 1, 3, "2024-03-03").await;

        let ReportResult::SalesLedger(report) = run(&db, "5", Some("1")).await else {
            panic!("wrong report shape");
        };
        let stats = report.stats.unwrap();
        // 0.05 / 3 = 0.01666..
        assert_eq!(stats.total, cents(5));
        assert_eq!(stats.average, cents(2));
    }

    #[tokio::test]
    async fn test_ledger_average_skips_sales_of_missing_products() {
        let db = memory_db().await;
        seed_basic_scenario(&db).await;
        insert_product(&db, 4, "Gone", 3000).await;
        insert_sale(&db, 4, 2, 4, 1, "2024-01-13").await;
        use sea_orm::ConnectionTrait;
        db.execute_unprepared("PRAGMA foreign_keys = OFF").await.unwrap();
        db.execute_unprepared("DELETE FROM products WHERE product_id = 4")
            .await
            .unwrap();

        let ReportResult::SalesLedger(report) = run(&db, "5", Some("2")).await else {
            panic!("wrong report shape");
        };
        assert_eq!(report.data.len(), 2);
        assert_eq!(report.data[0].amount, Decimal::ZERO);

        let stats = report.stats.unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total, cents(5000));
        // 50.00 over the one priced sale, not over both
        assert_eq!(stats.average, cents(5000));
    }

    #[tokio::test]
    async fn test_largest_accepted_amount_goes_through_reports() {
        use crate::dashboards::d401_dashboard_summary::service::compute_dashboard_summary;
        use crate::domain::{a002_product, a003_sale};
        use contracts::domain::a002_product::aggregate::ProductDto;
        use contracts::domain::a003_sale::aggregate::SaleDto;

        let db = memory_db().await;
        insert_employee(&db, 1, "Alice").await;
        let product_id = a002_product::service::create(
            &db,
            ProductDto {
                product_id: None,
                product_name: "Yacht".into(),
                unit_price: cents(money::MAX_UNIT_PRICE_CENTS),
            },
        )
        .await
        .unwrap();
        a003_sale::service::create(
            &db,
            SaleDto {
                sale_id: None,
                emp_id: 1,
                product_id: product_id.value(),
                quantity: i32::MAX,
                sale_date: date("2024-05-01"),
            },
        )
        .await
        .unwrap();

        let expected = cents(money::MAX_UNIT_PRICE_CENTS * i32::MAX as i64);

        let ReportResult::SalesLedger(report) = run(&db, "5", Some("1")).await else {
            panic!("wrong report shape");
        };
        assert_eq!(report.data[0].amount, expected);
        let stats = report.stats.unwrap();
        assert_eq!((stats.count, stats.total, stats.average), (1, expected, expected));
        assert_eq!(stats.top_products[0].total_amount, expected);

        let ReportResult::TopSellingProducts(report) = run(&db, "6", None).await else {
            panic!("wrong report shape");
        };
        assert_eq!(report.data[0].total_amount, expected);
        assert_eq!(report.average, expected);

        let summary = compute_dashboard_summary(&db).await;
        assert_eq!(summary.sale_count, 1);
        assert_eq!(summary.total_sales, expected);
        assert_eq!(summary.recent_sales[0].amount, expected);
    }

    // ========================================================================
    // Report 6
    // ========================================================================

    #[tokio::test]
    async fn test_top_selling_products() {
        let db = memory_db().await;
        seed_basic_scenario(&db).await;

        let ReportResult::TopSellingProducts(report) = run(&db, "6", None).await else {
            panic!("wrong report shape");
        };
        let got: Vec<_> = report
            .data
            .iter()
            .map(|r| (r.product_id, r.total_quantity, r.total_amount))
            .collect();
        assert_eq!(
            got,
            vec![(Some(1), 7, cents(7000)), (Some(2), 1, cents(2000))]
        );
        assert_eq!(report.average, cents(4500));
    }

    #[tokio::test]
    async fn test_top_selling_limit_and_average_over_all_products() {
        let db = memory_db().await;
        insert_employee(&db, 1, "Alice").await;
        for id in 1..=7 {
            insert_product(&db, id, &format!("P{}", id), id * 100).await;
            insert_sale(&db, id, 1, id, 1, "2024-04-01").await;
        }

        let ReportResult::TopSellingProducts(report) = run(&db, "6", None).await else {
            panic!("wrong report shape");
        };
        let ids: Vec<_> = report.data.iter().map(|r| r.product_id).collect();
        assert_eq!(ids, vec![Some(7), Some(6), Some(5), Some(4), Some(3)]);
        // (1+2+..+7) / 7 = 4.00, not the mean of the five listed
        assert_eq!(report.average, cents(400));
    }

    #[test]
    fn test_average_of_totals() {
        assert_eq!(average_of_totals(&[]), Decimal::ZERO);
        assert_eq!(average_of_totals(&[7000, 2000]), cents(4500));
        // 1.00 / 3 = 0.333..
        assert_eq!(average_of_totals(&[100, 0, 0]), cents(33));
        // the sum of the totals may exceed i64 cents
        assert_eq!(average_of_totals(&[i64::MAX, i64::MAX]), cents(i64::MAX));
    }

    // ========================================================================
    // Common
    // ========================================================================

    #[tokio::test]
    async fn test_reports_are_repeatable() {
        let db = memory_db().await;
        seed_basic_scenario(&db).await;

        for tag in ["1", "2", "3", "4", "5", "6"] {
            let first = run(&db, tag, Some("1")).await;
            let second = run(&db, tag, Some("1")).await;
            assert_eq!(first, second, "report {}", tag);
        }
    }

    #[tokio::test]
    async fn test_dangling_references_still_count() {
        let db = memory_db().await;
        seed_basic_scenario(&db).await;
        insert_sale(&db, 4, 2, 2, 1, "2024-01-13").await;
        // remove Bob behind the service's back
        use sea_orm::ConnectionTrait;
        db.execute_unprepared("PRAGMA foreign_keys = OFF").await.unwrap();
        db.execute_unprepared("DELETE FROM employees WHERE emp_id = 2")
            .await
            .unwrap();

        let ReportResult::EmployeeSalesCount(rows) = run(&db, "1", None).await else {
            panic!("wrong report shape");
        };
        let got: Vec<_> = rows
            .iter()
            .map(|r| (r.emp_id, r.emp_name.clone(), r.sales_count))
            .collect();
        // NULL sorts first in ascending order
        assert_eq!(
            got,
            vec![(None, None, 2), (Some(1), Some("Alice".to_string()), 2)]
        );
    }
}
