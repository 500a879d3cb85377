pub mod logger;
pub mod money;
