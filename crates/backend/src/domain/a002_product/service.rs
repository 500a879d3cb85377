use contracts::domain::a002_product::aggregate::{Product, ProductDto, ProductId};
use sea_orm::DatabaseConnection;

use super::repository;
use crate::domain::a003_sale;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::format::format_money;
use crate::shared::logger;

pub async fn list_all(db: &DatabaseConnection) -> ServiceResult<Vec<Product>> {
    Ok(repository::list_all(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: ProductId) -> ServiceResult<Product> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Product {}", id)))
}

pub async fn create(db: &DatabaseConnection, dto: ProductDto) -> ServiceResult<ProductId> {
    dto.validate().map_err(ServiceError::Validation)?;

    let id = repository::insert(db, &dto).await?;
    logger::log(
        "products",
        &format!(
            "Product {} created ({} @ {})",
            id,
            dto.product_name.trim(),
            format_money(dto.unit_price)
        ),
    );
    Ok(id)
}

/// Changing the price also changes every report over past sales of this
/// product; amounts are always derived from the current price.
pub async fn update(db: &DatabaseConnection, dto: ProductDto) -> ServiceResult<()> {
    let id = dto
        .product_id
        .map(ProductId::new)
        .ok_or_else(|| ServiceError::Validation("Product ID is required".into()))?;
    dto.validate().map_err(ServiceError::Validation)?;

    let mut product = get_by_id(db, id).await?;
    let old_price = product.unit_price;
    product.update(&dto);
    repository::update(db, &product).await?;

    if old_price != product.unit_price {
        logger::log(
            "products",
            &format!(
                "Product {} price changed {} -> {}",
                id,
                format_money(old_price),
                format_money(product.unit_price)
            ),
        );
    } else {
        logger::log("products", &format!("Product {} updated", id));
    }
    Ok(())
}

pub async fn delete(db: &DatabaseConnection, id: ProductId) -> ServiceResult<()> {
    let sales = a003_sale::repository::count_by_product(db, id).await?;
    if sales > 0 {
        return Err(ServiceError::Conflict(format!(
            "Product {} has {} sale(s)",
            id, sales
        )));
    }

    if !repository::delete(db, id).await? {
        return Err(ServiceError::NotFound(format!("Product {}", id)));
    }
    logger::log("products", &format!("Product {} deleted", id));
    Ok(())
}
