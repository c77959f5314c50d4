use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Body measurements are append-only; there is no `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct BodyMeasurement {
    pub id: Uuid,
    pub user_id: Uuid,
    #[sqlx(rename = "measured_on")]
    pub date: NaiveDate,
    pub neck: Option<f64>,
    pub chest: Option<f64>,
    pub shoulders: Option<f64>,
    pub bicep: Option<f64>,
    pub forearm: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub thigh: Option<f64>,
    pub created_at: DateTime<Utc>,
}
