use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a003_sale::aggregate::{Sale, SaleDto, SaleId, SaleListItem};
use serde_json::json;

use super::error_status;
use crate::domain::a003_sale;
use crate::shared::data::db::get_connection;

/// GET /api/sales
pub async fn list_all() -> Result<Json<Vec<SaleListItem>>, StatusCode> {
    match a003_sale::service::list_all(get_connection()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(error_status("list sales", e)),
    }
}

/// GET /api/sales/:id
pub async fn get_by_id(Path(id): Path<i64>) -> Result<Json<Sale>, StatusCode> {
    match a003_sale::service::get_by_id(get_connection(), SaleId::new(id)).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(error_status("get sale", e)),
    }
}

/// POST /api/sales
pub async fn create(Json(dto): Json<SaleDto>) -> Result<Json<serde_json::Value>, StatusCode> {
    match a003_sale::service::create(get_connection(), dto).await {
        Ok(id) => Ok(Json(json!({"id": id.value()}))),
        Err(e) => Err(error_status("create sale", e)),
    }
}

/// PUT /api/sales/:id
pub async fn update(
    Path(id): Path<i64>,
    Json(mut dto): Json<SaleDto>,
) -> Result<StatusCode, StatusCode> {
    dto.sale_id = Some(id);
    match a003_sale::service::update(get_connection(), dto).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => Err(error_status("update sale", e)),
    }
}

/// DELETE /api/sales/:id
pub async fn delete(Path(id): Path<i64>) -> Result<StatusCode, StatusCode> {
    match a003_sale::service::delete(get_connection(), SaleId::new(id)).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => Err(error_status("delete sale", e)),
    }
}
