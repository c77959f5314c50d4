use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One logged day. `protein_hit` and `calories_ok` are derived by the
/// evaluator on every write and never taken from client input.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct DailyEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    #[sqlx(rename = "log_date")]
    pub date: NaiveDate,
    pub weight: f64,
    pub calories: i32,
    pub protein: i32,
    pub carbs: Option<i32>,
    pub fats: Option<i32>,
    pub steps: i32,
    pub water: f64,
    pub sleep: f64,
    pub workout: bool,
    pub cardio: bool,
    pub fruit: bool,
    pub protein_hit: bool,
    pub calories_ok: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct DailyLogQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
