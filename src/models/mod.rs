pub mod daily_log;
pub mod measurement;
pub mod monthly_metrics;
pub mod target;
pub mod user;
