use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Tables owned by the application, in creation order
const SCHEMA: &[(&str, &str)] = &[
    (
        "employees",
        r#"
            CREATE TABLE employees (
                emp_id INTEGER PRIMARY KEY AUTOINCREMENT,
                emp_name TEXT NOT NULL,
                title TEXT NOT NULL DEFAULT '',
                hire_date TEXT NOT NULL
            );
        "#,
    ),
    (
        "products",
        r#"
            CREATE TABLE products (
                product_id INTEGER PRIMARY KEY AUTOINCREMENT,
                product_name TEXT NOT NULL,
                unit_price_cents INTEGER NOT NULL DEFAULT 0 CHECK (unit_price_cents >= 0)
            );
        "#,
    ),
    (
        "sales",
        r#"
            CREATE TABLE sales (
                sale_id INTEGER PRIMARY KEY AUTOINCREMENT,
                emp_id INTEGER NOT NULL REFERENCES employees(emp_id),
                product_id INTEGER NOT NULL REFERENCES products(product_id),
                quantity INTEGER NOT NULL CHECK (quantity > 0),
                sale_date TEXT NOT NULL
            );
        "#,
    ),
    (
        "reports",
        r#"
            CREATE TABLE reports (
                report_id INTEGER PRIMARY KEY AUTOINCREMENT,
                report_name TEXT NOT NULL,
                report_date TEXT NOT NULL
            );
        "#,
    ),
    (
        "system_log",
        r#"
            CREATE TABLE system_log (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp TEXT NOT NULL,
                source TEXT NOT NULL,
                category TEXT NOT NULL,
                message TEXT NOT NULL
            );
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_sales_emp_id ON sales (emp_id);",
    "CREATE INDEX IF NOT EXISTS idx_sales_product_id ON sales (product_id);",
    "CREATE INDEX IF NOT EXISTS idx_sales_sale_date ON sales (sale_date);",
];

fn build_sqlite_url(path: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    let db_url = build_sqlite_url(&absolute_path);
    tracing::info!("Opening database {}", absolute_path.display());

    let conn = Database::connect(&db_url).await?;
    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Create missing tables and indexes. Safe to run on every start.
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> Result<(), DbErr> {
    for (table, ddl) in SCHEMA {
        if table_exists(conn, table).await? {
            tracing::debug!("Table {} already exists", table);
            continue;
        }
        tracing::info!("Creating {} table", table);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await?;
    }

    for ddl in INDEXES {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await?;
    }
    Ok(())
}

async fn table_exists(conn: &DatabaseConnection, table: &str) -> Result<bool, DbErr> {
    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?;",
            [table.into()],
        ))
        .await?;
    Ok(!rows.is_empty())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Connection, if the database has been initialized
pub fn try_get_connection() -> Option<&'static DatabaseConnection> {
    DB_CONN.get()
}
