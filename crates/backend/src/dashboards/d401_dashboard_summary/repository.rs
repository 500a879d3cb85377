use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, Statement};

#[derive(Debug, FromQueryResult)]
struct CountRow {
    row_count: i64,
}

#[derive(Debug, FromQueryResult)]
struct TotalRow {
    total_cents: i64,
}

async fn count_rows(db: &DatabaseConnection, sql: &str) -> Result<i64, DbErr> {
    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    let row = CountRow::find_by_statement(stmt).one(db).await?;
    Ok(row.map(|r| r.row_count).unwrap_or(0))
}

pub async fn employee_count(db: &DatabaseConnection) -> Result<i64, DbErr> {
    count_rows(db, "SELECT COUNT(*) AS row_count FROM employees").await
}

pub async fn product_count(db: &DatabaseConnection) -> Result<i64, DbErr> {
    count_rows(db, "SELECT COUNT(*) AS row_count FROM products").await
}

pub async fn sale_count(db: &DatabaseConnection) -> Result<i64, DbErr> {
    count_rows(db, "SELECT COUNT(*) AS row_count FROM sales").await
}

/// Sum of `quantity * unit_price` over all sales, in cents; zero on an empty store
pub async fn total_sales_cents(db: &DatabaseConnection) -> Result<i64, DbErr> {
    let sql = r#"
        SELECT COALESCE(SUM(s.quantity * p.unit_price_cents), 0) AS total_cents
        FROM sales s
        LEFT JOIN products p ON s.product_id = p.product_id
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    let row = TotalRow::find_by_statement(stmt).one(db).await?;
    Ok(row.map(|r| r.total_cents).unwrap_or(0))
}
