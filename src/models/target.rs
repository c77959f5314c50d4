use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct UserTarget {
    pub user_id: Uuid,
    pub calorie_target: i32,
    pub protein_target: i32,
    pub goal_weight: f64,
    pub updated_at: DateTime<Utc>,
}
