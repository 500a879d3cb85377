use contracts::domain::a001_employee::aggregate::{Employee, EmployeeDto, EmployeeId};
use sea_orm::DatabaseConnection;

use super::repository;
use crate::domain::a003_sale;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::logger;

/// Список всех сотрудников
pub async fn list_all(db: &DatabaseConnection) -> ServiceResult<Vec<Employee>> {
    Ok(repository::list_all(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: EmployeeId) -> ServiceResult<Employee> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Employee {}", id)))
}

/// Создание нового сотрудника
pub async fn create(db: &DatabaseConnection, dto: EmployeeDto) -> ServiceResult<EmployeeId> {
    dto.validate().map_err(ServiceError::Validation)?;

    let id = repository::insert(db, &dto).await?;
    logger::log("employees", &format!("Employee {} created ({})", id, dto.emp_name.trim()));
    Ok(id)
}

/// Обновление существующего сотрудника
pub async fn update(db: &DatabaseConnection, dto: EmployeeDto) -> ServiceResult<()> {
    let id = dto
        .emp_id
        .map(EmployeeId::new)
        .ok_or_else(|| ServiceError::Validation("Employee ID is required".into()))?;
    dto.validate().map_err(ServiceError::Validation)?;

    let mut employee = get_by_id(db, id).await?;
    employee.update(&dto);
    repository::update(db, &employee).await?;

    logger::log("employees", &format!("Employee {} updated", id));
    Ok(())
}

/// Удаление сотрудника. Refused while sales still reference the employee.
pub async fn delete(db: &DatabaseConnection, id: EmployeeId) -> ServiceResult<()> {
    let sales = a003_sale::repository::count_by_employee(db, id).await?;
    if sales > 0 {
        return Err(ServiceError::Conflict(format!(
            "Employee {} has {} sale(s)",
            id, sales
        )));
    }

    if !repository::delete(db, id).await? {
        return Err(ServiceError::NotFound(format!("Employee {}", id)));
    }
    logger::log("employees", &format!("Employee {} deleted", id));
    Ok(())
}
