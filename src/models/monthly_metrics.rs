use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "bmi_category")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify an already rounded BMI value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// Derived fields of one calendar month. Produced by the aggregator and
/// fully replaced on every recompute.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct MonthlySummary {
    /// First day of the month
    pub month: NaiveDate,
    pub avg_weight: Option<f64>,
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub weight_change: Option<f64>,
    pub consistency_score: i32,
    pub days_logged: i32,
    pub protein_hit_days: i32,
    pub workout_days: i32,
    pub total_days_in_month: i32,
}

/// Persisted monthly rollup, unique per (user_id, month).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct MonthlyMetrics {
    pub user_id: Uuid,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub summary: MonthlySummary,
    pub updated_at: DateTime<Utc>,
}

impl MonthlyMetrics {
    pub fn new(user_id: Uuid, summary: MonthlySummary, computed_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            summary,
            updated_at: computed_at,
        }
    }

    pub fn month(&self) -> NaiveDate {
        self.summary.month
    }
}
