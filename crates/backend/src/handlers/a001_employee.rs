use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_employee::aggregate::{Employee, EmployeeDto, EmployeeId};
use serde_json::json;

use super::error_status;
use crate::domain::a001_employee;
use crate::shared::data::db::get_connection;

/// GET /api/employees
pub async fn list_all() -> Result<Json<Vec<Employee>>, StatusCode> {
    match a001_employee::service::list_all(get_connection()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(error_status("list employees", e)),
    }
}

/// GET /api/employees/:id
pub async fn get_by_id(Path(id): Path<i64>) -> Result<Json<Employee>, StatusCode> {
    match a001_employee::service::get_by_id(get_connection(), EmployeeId::new(id)).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(error_status("get employee", e)),
    }
}

/// POST /api/employees
pub async fn create(Json(dto): Json<EmployeeDto>) -> Result<Json<serde_json::Value>, StatusCode> {
    match a001_employee::service::create(get_connection(), dto).await {
        Ok(id) => Ok(Json(json!({"id": id.value()}))),
        Err(e) => Err(error_status("create employee", e)),
    }
}

/// PUT /api/employees/:id
pub async fn update(
    Path(id): Path<i64>,
    Json(mut dto): Json<EmployeeDto>,
) -> Result<StatusCode, StatusCode> {
    dto.emp_id = Some(id);
    match a001_employee::service::update(get_connection(), dto).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => Err(error_status("update employee", e)),
    }
}

/// DELETE /api/employees/:id
pub async fn delete(Path(id): Path<i64>) -> Result<StatusCode, StatusCode> {
    match a001_employee::service::delete(get_connection(), EmployeeId::new(id)).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => Err(error_status("delete employee", e)),
    }
}
