use contracts::domain::a004_saved_report::aggregate::{SavedReport, SavedReportDto};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub report_id: i64,
    pub report_name: String,
    pub report_date: chrono::NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SavedReport {
    fn from(m: Model) -> Self {
        SavedReport {
            report_id: m.report_id,
            report_name: m.report_name,
            report_date: m.report_date,
        }
    }
}

/// Newest first
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<SavedReport>, DbErr> {
    let items = Entity::find()
        .order_by_desc(Column::ReportDate)
        .order_by_desc(Column::ReportId)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert(db: &DatabaseConnection, dto: &SavedReportDto) -> Result<i64, DbErr> {
    let active = ActiveModel {
        report_id: sea_orm::ActiveValue::NotSet,
        report_name: Set(dto.report_name.trim().to_string()),
        report_date: Set(dto.report_date),
    };
    let model = active.insert(db).await?;
    Ok(model.report_id)
}
