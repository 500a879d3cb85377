pub mod repository;

use crate::shared::data::db::try_get_connection;

/// Логирование события на сервере
///
/// The event goes to `tracing` right away and is persisted to `system_log`
/// in the background. Before the database is initialized only the tracing
/// line is written.
///
/// # Примеры
/// ```ignore
/// logger::log("startup", "Server started");
/// logger::log("sales", "Sale 12 created");
/// ```
pub fn log(category: &str, message: &str) {
    tracing::info!(target: "event_log", category, "{}", message);

    let Some(db) = try_get_connection() else {
        return;
    };
    let category = category.to_string();
    let message = message.to_string();

    tokio::spawn(async move {
        if let Err(e) = repository::log_event(db, "server", &category, &message).await {
            tracing::warn!("Failed to persist log event: {}", e);
        }
    });
}
