use contracts::domain::a001_employee::aggregate::EmployeeId;
use contracts::domain::a002_product::aggregate::ProductId;
use contracts::domain::a003_sale::aggregate::{Sale, SaleDto, SaleId, SaleListItem};
use sea_orm::DatabaseConnection;

use super::repository;
use crate::domain::{a001_employee, a002_product};
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::logger;

/// Все продажи с именами сотрудника и товара
pub async fn list_all(db: &DatabaseConnection) -> ServiceResult<Vec<SaleListItem>> {
    Ok(repository::list_with_names(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: SaleId) -> ServiceResult<Sale> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Sale {}", id)))
}

/// Validate the DTO and check that both references resolve
async fn check_dto(db: &DatabaseConnection, dto: &SaleDto) -> ServiceResult<()> {
    dto.validate().map_err(ServiceError::Validation)?;

    if !a001_employee::repository::exists(db, EmployeeId::new(dto.emp_id)).await? {
        return Err(ServiceError::Validation(format!(
            "Employee {} does not exist",
            dto.emp_id
        )));
    }
    if !a002_product::repository::exists(db, ProductId::new(dto.product_id)).await? {
        return Err(ServiceError::Validation(format!(
            "Product {} does not exist",
            dto.product_id
        )));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, dto: SaleDto) -> ServiceResult<SaleId> {
    check_dto(db, &dto).await?;

    let id = repository::insert(db, &dto).await?;
    logger::log(
        "sales",
        &format!(
            "Sale {} created (employee {}, product {}, qty {})",
            id, dto.emp_id, dto.product_id, dto.quantity
        ),
    );
    Ok(id)
}

pub async fn update(db: &DatabaseConnection, dto: SaleDto) -> ServiceResult<()> {
    let id = dto
        .sale_id
        .map(SaleId::new)
        .ok_or_else(|| ServiceError::Validation("Sale ID is required".into()))?;
    check_dto(db, &dto).await?;

    let mut sale = get_by_id(db, id).await?;
    sale.update(&dto);
    repository::update(db, &sale).await?;

    logger::log("sales", &format!("Sale {} updated", id));
    Ok(())
}

pub async fn delete(db: &DatabaseConnection, id: SaleId) -> ServiceResult<()> {
    if !repository::delete(db, id).await? {
        return Err(ServiceError::NotFound(format!("Sale {}", id)));
    }
    logger::log("sales", &format!("Sale {} deleted", id));
    Ok(())
}
