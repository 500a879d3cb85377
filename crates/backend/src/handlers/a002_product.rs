use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_product::aggregate::{Product, ProductDto, ProductId};
use serde_json::json;

use super::error_status;
use crate::domain::a002_product;
use crate::shared::data::db::get_connection;

/// GET /api/products
pub async fn list_all() -> Result<Json<Vec<Product>>, StatusCode> {
    match a002_product::service::list_all(get_connection()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(error_status("list products", e)),
    }
}

/// GET /api/products/:id
pub async fn get_by_id(Path(id): Path<i64>) -> Result<Json<Product>, StatusCode> {
    match a002_product::service::get_by_id(get_connection(), ProductId::new(id)).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(error_status("get product", e)),
    }
}

/// POST /api/products
pub async fn create(Json(dto): Json<ProductDto>) -> Result<Json<serde_json::Value>, StatusCode> {
    match a002_product::service::create(get_connection(), dto).await {
        Ok(id) => Ok(Json(json!({"id": id.value()}))),
        Err(e) => Err(error_status("create product", e)),
    }
}

/// PUT /api/products/:id
pub async fn update(
    Path(id): Path<i64>,
    Json(mut dto): Json<ProductDto>,
) -> Result<StatusCode, StatusCode> {
    dto.product_id = Some(id);
    match a002_product::service::update(get_connection(), dto).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => Err(error_status("update product", e)),
    }
}

/// DELETE /api/products/:id
pub async fn delete(Path(id): Path<i64>) -> Result<StatusCode, StatusCode> {
    match a002_product::service::delete(get_connection(), ProductId::new(id)).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => Err(error_status("delete product", e)),
    }
}
