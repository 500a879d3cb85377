use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, Statement, Value};

// Every query starts from `sales` and LEFT JOINs the reference tables, so a
// sale whose employee or product is gone still counts, with NULL names.
// Amounts are `quantity * unit_price_cents`, exact integer cents.

/// Report 1: number of sale rows per employee
#[derive(Debug, Clone, FromQueryResult)]
pub struct EmployeeSalesCountRow {
    pub emp_id: Option<i64>,
    pub emp_name: Option<String>,
    pub sales_count: i64,
}

pub async fn employee_sales_count(
    db: &DatabaseConnection,
) -> Result<Vec<EmployeeSalesCountRow>, DbErr> {
    let sql = r#"
        SELECT
            e.emp_id AS emp_id,
            e.emp_name AS emp_name,
            COUNT(*) AS sales_count
        FROM sales s
        LEFT JOIN employees e ON s.emp_id = e.emp_id
        GROUP BY e.emp_id, e.emp_name
        ORDER BY e.emp_id ASC
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    EmployeeSalesCountRow::find_by_statement(stmt).all(db).await
}

/// Report 2: total quantity per product
#[derive(Debug, Clone, FromQueryResult)]
pub struct ProductVolumeRow {
    pub product_id: Option<i64>,
    pub product_name: Option<String>,
    pub total_quantity: i64,
}

pub async fn product_sales_volume(db: &DatabaseConnection) -> Result<Vec<ProductVolumeRow>, DbErr> {
    let sql = r#"
        SELECT
            p.product_id AS product_id,
            p.product_name AS product_name,
            SUM(s.quantity) AS total_quantity
        FROM sales s
        LEFT JOIN products p ON s.product_id = p.product_id
        GROUP BY p.product_id, p.product_name
        ORDER BY total_quantity DESC, p.product_id ASC
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    ProductVolumeRow::find_by_statement(stmt).all(db).await
}

/// Quantity sum and sale count of one group; the mean is taken in `Decimal`
#[derive(Debug, Clone, FromQueryResult)]
pub struct QuantityStatsRow {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub total_quantity: i64,
    pub sales_count: i64,
}

/// Report 3 input, ranked by mean quantity per sale
pub async fn employee_quantity_stats(
    db: &DatabaseConnection,
) -> Result<Vec<QuantityStatsRow>, DbErr> {
    let sql = r#"
        SELECT
            e.emp_id AS id,
            e.emp_name AS name,
            SUM(s.quantity) AS total_quantity,
            COUNT(*) AS sales_count
        FROM sales s
        LEFT JOIN employees e ON s.emp_id = e.emp_id
        GROUP BY e.emp_id, e.emp_name
        ORDER BY AVG(s.quantity) DESC, e.emp_id ASC
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    QuantityStatsRow::find_by_statement(stmt).all(db).await
}

/// Report 4 input, ranked by mean quantity per sale
pub async fn product_quantity_stats(
    db: &DatabaseConnection,
) -> Result<Vec<QuantityStatsRow>, DbErr> {
    let sql = r#"
        SELECT
            p.product_id AS id,
            p.product_name AS name,
            SUM(s.quantity) AS total_quantity,
            COUNT(*) AS sales_count
        FROM sales s
        LEFT JOIN products p ON s.product_id = p.product_id
        GROUP BY p.product_id, p.product_name
        ORDER BY AVG(s.quantity) DESC, p.product_id ASC
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    QuantityStatsRow::find_by_statement(stmt).all(db).await
}

/// One ledger line. Missing products price at zero.
#[derive(Debug, Clone, FromQueryResult)]
pub struct LedgerRow {
    pub sale_id: i64,
    pub emp_name: Option<String>,
    pub product_name: Option<String>,
    pub quantity: i64,
    pub sale_date: chrono::NaiveDate,
    pub amount_cents: i64,
}

/// Sales newest first (`sale_date` desc, then `sale_id` desc).
///
/// Shared by report 5 and the dashboard's recent sales.
pub async fn sales_ledger(
    db: &DatabaseConnection,
    emp_id: Option<i64>,
    limit: Option<i64>,
) -> Result<Vec<LedgerRow>, DbErr> {
    let mut sql = String::from(
        r#"
        SELECT
            s.sale_id AS sale_id,
            e.emp_name AS emp_name,
            p.product_name AS product_name,
            s.quantity AS quantity,
            s.sale_date AS sale_date,
            COALESCE(s.quantity * p.unit_price_cents, 0) AS amount_cents
        FROM sales s
        LEFT JOIN employees e ON s.emp_id = e.emp_id
        LEFT JOIN products p ON s.product_id = p.product_id
        "#,
    );
    let mut values: Vec<Value> = Vec::new();

    if let Some(emp_id) = emp_id {
        sql.push_str(" WHERE s.emp_id = ?");
        values.push(emp_id.into());
    }
    sql.push_str(" ORDER BY s.sale_date DESC, s.sale_id DESC");
    if let Some(limit) = limit {
        sql.push_str(" LIMIT ?");
        values.push(limit.into());
    }

    let stmt = Statement::from_sql_and_values(DatabaseBackend::Sqlite, &sql, values);
    LedgerRow::find_by_statement(stmt).all(db).await
}

/// Amount total and sale count of one employee.
///
/// `priced_count` leaves out sales whose product is missing.
#[derive(Debug, Clone, FromQueryResult)]
pub struct AmountTotalsRow {
    pub total_cents: i64,
    pub sales_count: i64,
    pub priced_count: i64,
}

pub async fn employee_amount_totals(
    db: &DatabaseConnection,
    emp_id: i64,
) -> Result<AmountTotalsRow, DbErr> {
    let sql = r#"
        SELECT
            COALESCE(SUM(s.quantity * p.unit_price_cents), 0) AS total_cents,
            COUNT(*) AS sales_count,
            COUNT(p.unit_price_cents) AS priced_count
        FROM sales s
        LEFT JOIN products p ON s.product_id = p.product_id
        WHERE s.emp_id = ?
    "#;

    let stmt = Statement::from_sql_and_values(DatabaseBackend::Sqlite, sql, [emp_id.into()]);
    let row = AmountTotalsRow::find_by_statement(stmt).one(db).await?;
    // An aggregate without GROUP BY always yields one row
    Ok(row.unwrap_or(AmountTotalsRow {
        total_cents: 0,
        sales_count: 0,
        priced_count: 0,
    }))
}

/// Product ranked by sales amount
#[derive(Debug, Clone, FromQueryResult)]
pub struct ProductAmountRow {
    pub product_id: Option<i64>,
    pub product_name: Option<String>,
    pub total_quantity: i64,
    pub total_cents: i64,
}

/// Best products of one employee by amount
pub async fn employee_top_products(
    db: &DatabaseConnection,
    emp_id: i64,
    limit: i64,
) -> Result<Vec<ProductAmountRow>, DbErr> {
    let sql = r#"
        SELECT
            p.product_id AS product_id,
            p.product_name AS product_name,
            SUM(s.quantity) AS total_quantity,
            COALESCE(SUM(s.quantity * p.unit_price_cents), 0) AS total_cents
        FROM sales s
        LEFT JOIN products p ON s.product_id = p.product_id
        WHERE s.emp_id = ?
        GROUP BY p.product_id, p.product_name
        ORDER BY total_cents DESC, p.product_id ASC
        LIMIT ?
    "#;

    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        sql,
        [emp_id.into(), limit.into()],
    );
    ProductAmountRow::find_by_statement(stmt).all(db).await
}

/// Report 6: best products overall by amount
pub async fn top_selling_products(
    db: &DatabaseConnection,
    limit: i64,
) -> Result<Vec<ProductAmountRow>, DbErr> {
    let sql = r#"
        SELECT
            p.product_id AS product_id,
            p.product_name AS product_name,
            SUM(s.quantity) AS total_quantity,
            COALESCE(SUM(s.quantity * p.unit_price_cents), 0) AS total_cents
        FROM sales s
        LEFT JOIN products p ON s.product_id = p.product_id
        GROUP BY p.product_id, p.product_name
        ORDER BY total_cents DESC, p.product_id ASC
        LIMIT ?
    "#;

    let stmt = Statement::from_sql_and_values(DatabaseBackend::Sqlite, sql, [limit.into()]);
    ProductAmountRow::find_by_statement(stmt).all(db).await
}

/// Total amount of every sold product, not only the top ones.
///
/// Sales pointing at a missing product have no price and are left out.
pub async fn product_amount_totals(db: &DatabaseConnection) -> Result<Vec<i64>, DbErr> {
    let sql = r#"
        SELECT SUM(s.quantity * p.unit_price_cents) AS total_cents
        FROM sales s
        LEFT JOIN products p ON s.product_id = p.product_id
        GROUP BY s.product_id
    "#;

    #[derive(Debug, FromQueryResult)]
    struct ProductTotal {
        total_cents: Option<i64>,
    }

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    let rows = ProductTotal::find_by_statement(stmt).all(db).await?;

    Ok(rows.into_iter().filter_map(|r| r.total_cents).collect())
}
