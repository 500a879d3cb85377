use std::path::PathBuf;

use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::{handlers, system};

/// Конфигурация всех роутов приложения
///
/// Everything that is not an API route falls through to the static front
/// end, when one is configured.
pub fn configure_routes(static_dir: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let router = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // BASE ENTITIES
        // ========================================
        .route(
            "/api/employees",
            get(handlers::a001_employee::list_all).post(handlers::a001_employee::create),
        )
        .route(
            "/api/employees/:id",
            get(handlers::a001_employee::get_by_id)
                .put(handlers::a001_employee::update)
                .delete(handlers::a001_employee::delete),
        )
        .route(
            "/api/products",
            get(handlers::a002_product::list_all).post(handlers::a002_product::create),
        )
        .route(
            "/api/products/:id",
            get(handlers::a002_product::get_by_id)
                .put(handlers::a002_product::update)
                .delete(handlers::a002_product::delete),
        )
        .route(
            "/api/sales",
            get(handlers::a003_sale::list_all).post(handlers::a003_sale::create),
        )
        .route(
            "/api/sales/:id",
            get(handlers::a003_sale::get_by_id)
                .put(handlers::a003_sale::update)
                .delete(handlers::a003_sale::delete),
        )
        .route(
            "/api/saved-reports",
            get(handlers::a004_saved_report::list_all).post(handlers::a004_saved_report::create),
        )
        // ========================================
        // REPORTS & DASHBOARD
        // ========================================
        .route(
            "/api/reports/:report_type",
            get(handlers::d400_sales_reports::get_report),
        )
        .route(
            "/api/dashboard",
            get(handlers::d401_dashboard_summary::get_summary),
        )
        // Query-string dispatcher of the original front end
        .route("/api.php", get(handlers::legacy_dispatch::dispatch))
        // ========================================
        // EVENT LOG
        // ========================================
        .route(
            "/api/logs",
            get(handlers::logs::list_all)
                .post(handlers::logs::create)
                .delete(handlers::logs::clear_all),
        );

    let router = match static_dir {
        Some(dir) => {
            tracing::info!("Serving static files from {}", dir.display());
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    };

    router
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
}
