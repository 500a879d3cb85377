use contracts::domain::a001_employee::aggregate::EmployeeId;
use contracts::domain::a002_product::aggregate::ProductId;
use contracts::domain::a003_sale::aggregate::{Sale, SaleDto, SaleId, SaleListItem};
use sea_orm::entity::prelude::*;
use sea_orm::{
    DatabaseBackend, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, Set, Statement,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub sale_id: i64,
    pub emp_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub sale_date: chrono::NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Sale {
    fn from(m: Model) -> Self {
        Sale {
            sale_id: SaleId::new(m.sale_id),
            emp_id: EmployeeId::new(m.emp_id),
            product_id: ProductId::new(m.product_id),
            quantity: m.quantity,
            sale_date: m.sale_date,
        }
    }
}

/// Sale joined with the employee and product names
#[derive(Debug, Clone, FromQueryResult)]
struct SaleWithNames {
    sale_id: i64,
    emp_id: i64,
    product_id: i64,
    quantity: i32,
    sale_date: chrono::NaiveDate,
    emp_name: Option<String>,
    product_name: Option<String>,
}

impl From<SaleWithNames> for SaleListItem {
    fn from(r: SaleWithNames) -> Self {
        SaleListItem {
            sale: Sale {
                sale_id: SaleId::new(r.sale_id),
                emp_id: EmployeeId::new(r.emp_id),
                product_id: ProductId::new(r.product_id),
                quantity: r.quantity,
                sale_date: r.sale_date,
            },
            emp_name: r.emp_name,
            product_name: r.product_name,
        }
    }
}

/// All sales with resolved names; names are `None` for dangling references
pub async fn list_with_names(db: &DatabaseConnection) -> Result<Vec<SaleListItem>, DbErr> {
    let sql = r#"
        SELECT
            s.sale_id,
            s.emp_id,
            s.product_id,
            s.quantity,
            s.sale_date,
            e.emp_name,
            p.product_name
        FROM sales s
        LEFT JOIN employees e ON s.emp_id = e.emp_id
        LEFT JOIN products p ON s.product_id = p.product_id
        ORDER BY s.sale_id
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    let rows = SaleWithNames::find_by_statement(stmt).all(db).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn get_by_id(db: &DatabaseConnection, id: SaleId) -> Result<Option<Sale>, DbErr> {
    let result = Entity::find_by_id(id.value()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, dto: &SaleDto) -> Result<SaleId, DbErr> {
    let active = ActiveModel {
        sale_id: sea_orm::ActiveValue::NotSet,
        emp_id: Set(dto.emp_id),
        product_id: Set(dto.product_id),
        quantity: Set(dto.quantity),
        sale_date: Set(dto.sale_date),
    };
    let model = active.insert(db).await?;
    Ok(SaleId::new(model.sale_id))
}

pub async fn update(db: &DatabaseConnection, sale: &Sale) -> Result<(), DbErr> {
    let active = ActiveModel {
        sale_id: Set(sale.sale_id.value()),
        emp_id: Set(sale.emp_id.value()),
        product_id: Set(sale.product_id.value()),
        quantity: Set(sale.quantity),
        sale_date: Set(sale.sale_date),
    };
    active.update(db).await?;
    Ok(())
}

pub async fn delete(db: &DatabaseConnection, id: SaleId) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id(id.value()).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn count_by_employee(db: &DatabaseConnection, id: EmployeeId) -> Result<u64, DbErr> {
    Entity::find()
        .filter(Column::EmpId.eq(id.value()))
        .count(db)
        .await
}

pub async fn count_by_product(db: &DatabaseConnection, id: ProductId) -> Result<u64, DbErr> {
    Entity::find()
        .filter(Column::ProductId.eq(id.value()))
        .count(db)
        .await
}
