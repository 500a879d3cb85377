//! Fixtures for tests that need a database.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};

use super::db;

/// Fresh in-memory database with the application schema.
///
/// The pool is pinned to one connection: every SQLite `:memory:` connection
/// is a separate database.
pub async fn memory_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(opts).await.expect("in-memory sqlite");
    db::bootstrap_schema(&conn).await.expect("schema bootstrap");
    conn
}

async fn exec(db: &DatabaseConnection, sql: &str, values: Vec<sea_orm::Value>) {
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        sql,
        values,
    ))
    .await
    .unwrap_or_else(|e| panic!("fixture failed: {sql}: {e}"));
}

pub async fn insert_employee(db: &DatabaseConnection, emp_id: i64, emp_name: &str) {
    exec(
        db,
        "INSERT INTO employees (emp_id, emp_name, title, hire_date) VALUES (?, ?, ?, ?)",
        vec![
            emp_id.into(),
            emp_name.into(),
            "Sales Rep".into(),
            "2022-01-01".into(),
        ],
    )
    .await;
}

pub async fn insert_product(db: &DatabaseConnection, product_id: i64, name: &str, price_cents: i64) {
    exec(
        db,
        "INSERT INTO products (product_id, product_name, unit_price_cents) VALUES (?, ?, ?)",
        vec![product_id.into(), name.into(), price_cents.into()],
    )
    .await;
}

pub async fn insert_sale(
    db: &DatabaseConnection,
    sale_id: i64,
    emp_id: i64,
    product_id: i64,
    quantity: i64,
    sale_date: &str,
) {
    exec(
        db,
        "INSERT INTO sales (sale_id, emp_id, product_id, quantity, sale_date) VALUES (?, ?, ?, ?, ?)",
        vec![
            sale_id.into(),
            emp_id.into(),
            product_id.into(),
            quantity.into(),
            sale_date.into(),
        ],
    )
    .await;
}

/// Two employees, three products (the third never sold) and three sales:
///
/// | sale | emp   | product        | qty | date       | amount |
/// |------|-------|----------------|-----|------------|--------|
/// | 1    | Alice | Widget (10.00) | 2   | 2024-01-10 | 20.00  |
/// | 2    | Alice | Gadget (20.00) | 1   | 2024-01-12 | 20.00  |
/// | 3    | Bob   | Widget (10.00) | 5   | 2024-01-11 | 50.00  |
pub async fn seed_basic_scenario(db: &DatabaseConnection) {
    insert_employee(db, 1, "Alice").await;
    insert_employee(db, 2, "Bob").await;
    insert_product(db, 1, "Widget", 1000).await;
    insert_product(db, 2, "Gadget", 2000).await;
    insert_product(db, 3, "Gizmo", 550).await;
    insert_sale(db, 1, 1, 1, 2, "2024-01-10").await;
    insert_sale(db, 2, 1, 2, 1, "2024-01-12").await;
    insert_sale(db, 3, 2, 1, 5, "2024-01-11").await;
}
