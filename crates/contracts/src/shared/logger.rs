use serde::{Deserialize, Serialize};

/// Запись лога системы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: String,
    /// "client" or "server"
    pub source: String,
    /// Area that produced the event, e.g. "employees", "sales", "startup"
    pub category: String,
    pub message: String,
}

/// DTO for posting a log line from the front end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLogRequest {
    #[serde(default = "default_source")]
    pub source: String,
    pub category: String,
    pub message: String,
}

fn default_source() -> String {
    "client".to_string()
}
