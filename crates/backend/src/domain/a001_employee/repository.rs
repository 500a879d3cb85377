use contracts::domain::a001_employee::aggregate::{Employee, EmployeeDto, EmployeeId};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub emp_id: i64,
    pub emp_name: String,
    pub title: String,
    pub hire_date: chrono::NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Employee {
    fn from(m: Model) -> Self {
        Employee {
            emp_id: EmployeeId::new(m.emp_id),
            emp_name: m.emp_name,
            title: m.title,
            hire_date: m.hire_date,
        }
    }
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Employee>, DbErr> {
    let items = Entity::find()
        .order_by_asc(Column::EmpId)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: EmployeeId) -> Result<Option<Employee>, DbErr> {
    let result = Entity::find_by_id(id.value()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn exists(db: &DatabaseConnection, id: EmployeeId) -> Result<bool, DbErr> {
    Ok(Entity::find_by_id(id.value()).count(db).await? > 0)
}

pub async fn insert(db: &DatabaseConnection, dto: &EmployeeDto) -> Result<EmployeeId, DbErr> {
    let active = ActiveModel {
        emp_id: sea_orm::ActiveValue::NotSet,
        emp_name: Set(dto.emp_name.trim().to_string()),
        title: Set(dto.title.trim().to_string()),
        hire_date: Set(dto.hire_date),
    };
    let model = active.insert(db).await?;
    Ok(EmployeeId::new(model.emp_id))
}

pub async fn update(db: &DatabaseConnection, employee: &Employee) -> Result<(), DbErr> {
    let active = ActiveModel {
        emp_id: Set(employee.emp_id.value()),
        emp_name: Set(employee.emp_name.clone()),
        title: Set(employee.title.clone()),
        hire_date: Set(employee.hire_date),
    };
    active.update(db).await?;
    Ok(())
}

pub async fn delete(db: &DatabaseConnection, id: EmployeeId) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id(id.value()).exec(db).await?;
    Ok(result.rows_affected > 0)
}
