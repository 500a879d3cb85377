use chrono::Utc;
use contracts::shared::logger::LogEntry;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "system_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub timestamp: String,
    pub source: String,
    pub category: String,
    pub message: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LogEntry {
    fn from(m: Model) -> Self {
        LogEntry {
            id: m.id,
            timestamp: m.timestamp,
            source: m.source,
            category: m.category,
            message: m.message,
        }
    }
}

/// Добавить запись в лог
pub async fn log_event(
    db: &DatabaseConnection,
    source: &str,
    category: &str,
    message: &str,
) -> Result<(), DbErr> {
    let now = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();

    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        timestamp: Set(now),
        source: Set(source.to_string()),
        category: Set(category.to_string()),
        message: Set(message.to_string()),
    };

    active.insert(db).await?;
    Ok(())
}

/// Получить все записи лога (новые сверху)
pub async fn get_all_logs(db: &DatabaseConnection) -> Result<Vec<LogEntry>, DbErr> {
    let logs = Entity::find()
        .order_by_desc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(logs)
}

/// Очистить все записи лога
pub async fn clear_all_logs(db: &DatabaseConnection) -> Result<u64, DbErr> {
    let result = Entity::delete_many().exec(db).await?;
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::memory_db;

    #[tokio::test]
    async fn test_log_round_trip_newest_first() {
        let db = memory_db().await;
        log_event(&db, "server", "startup", "first").await.unwrap();
        log_event(&db, "client", "ui", "second").await.unwrap();

        let logs = get_all_logs(&db).await.unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].message, "second");
        assert_eq!(logs[0].source, "client");
        assert_eq!(logs[1].category, "startup");

        assert_eq!(clear_all_logs(&db).await.unwrap(), 2);
        assert!(get_all_logs(&db).await.unwrap().is_empty());
    }
}
