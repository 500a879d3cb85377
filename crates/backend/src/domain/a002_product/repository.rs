use contracts::domain::a002_product::aggregate::{Product, ProductDto, ProductId};
use contracts::shared::money;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub product_id: i64,
    pub product_name: String,
    /// Unit price in minor units
    pub unit_price_cents: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            product_id: ProductId::new(m.product_id),
            product_name: m.product_name,
            unit_price: money::from_cents(m.unit_price_cents),
        }
    }
}

fn price_to_cents(price: rust_decimal::Decimal) -> Result<i64, DbErr> {
    money::to_cents(price).ok_or_else(|| DbErr::Custom(format!("Unrepresentable price {}", price)))
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Product>, DbErr> {
    let items = Entity::find()
        .order_by_asc(Column::ProductId)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: ProductId) -> Result<Option<Product>, DbErr> {
    let result = Entity::find_by_id(id.value()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn exists(db: &DatabaseConnection, id: ProductId) -> Result<bool, DbErr> {
    Ok(Entity::find_by_id(id.value()).count(db).await? > 0)
}

pub async fn insert(db: &DatabaseConnection, dto: &ProductDto) -> Result<ProductId, DbErr> {
    let active = ActiveModel {
        product_id: sea_orm::ActiveValue::NotSet,
        product_name: Set(dto.product_name.trim().to_string()),
        unit_price_cents: Set(price_to_cents(dto.unit_price)?),
    };
    let model = active.insert(db).await?;
    Ok(ProductId::new(model.product_id))
}

pub async fn update(db: &DatabaseConnection, product: &Product) -> Result<(), DbErr> {
    let active = ActiveModel {
        product_id: Set(product.product_id.value()),
        product_name: Set(product.product_name.clone()),
        unit_price_cents: Set(price_to_cents(product.unit_price)?),
    };
    active.update(db).await?;
    Ok(())
}

pub async fn delete(db: &DatabaseConnection, id: ProductId) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id(id.value()).exec(db).await?;
    Ok(result.rows_affected > 0)
}
