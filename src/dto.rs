//! # FitLog — Request/Response DTOs
//!
//! API contract types for the log and dashboard endpoints.
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body or query params
//! - `*Response` → serialized to client JSON
//! - Field-level validation is expressed via `validator` derive macros

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::daily_log::DailyEntry;
use crate::models::monthly_metrics::MonthlyMetrics;
use crate::models::target::UserTarget;

// ============================================================================
// Common
// ============================================================================

/// Delete confirmation
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub date: NaiveDate,
}

// ============================================================================
// Daily logs
// ============================================================================

/// POST /api/logs — creates or fully replaces the entry for `date`.
/// `protein_hit` and `calories_ok` are not accepted; they are always derived.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertDailyLogRequest {
    /// Default: today
    pub date: Option<NaiveDate>,

    #[validate(range(min = 0.1, max = 999.9, message = "Weight must be between 0.1 and 999.9"))]
    pub weight: f64,

    #[serde(default)]
    #[validate(range(min = 0, message = "Calories cannot be negative"))]
    pub calories: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "Protein cannot be negative"))]
    pub protein: i32,

    #[validate(range(min = 0, message = "Carbs cannot be negative"))]
    pub carbs: Option<i32>,

    #[validate(range(min = 0, message = "Fats cannot be negative"))]
    pub fats: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Steps cannot be negative"))]
    pub steps: i32,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 99.9, message = "Water must be between 0 and 99.9"))]
    pub water: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 24.0, message = "Sleep must be between 0 and 24 hours"))]
    pub sleep: f64,

    #[serde(default)]
    pub workout: bool,
    #[serde(default)]
    pub cardio: bool,
    #[serde(default)]
    pub fruit: bool,
}

// ============================================================================
// Dashboard
// ============================================================================

/// Today's entry as shown on the dashboard card
#[derive(Debug, Serialize)]
pub struct TodayLog {
    pub weight: f64,
    pub calories: i32,
    pub protein: i32,
    pub steps: i32,
    pub water: f64,
    pub sleep: f64,
    pub workout: bool,
    pub protein_hit: bool,
    pub calories_ok: bool,
}

impl From<DailyEntry> for TodayLog {
    fn from(e: DailyEntry) -> Self {
        Self {
            weight: e.weight,
            calories: e.calories,
            protein: e.protein,
            steps: e.steps,
            water: e.water,
            sleep: e.sleep,
            workout: e.workout,
            protein_hit: e.protein_hit,
            calories_ok: e.calories_ok,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TargetSnapshot {
    pub calorie_target: i32,
    pub protein_target: i32,
    pub goal_weight: f64,
}

impl From<UserTarget> for TargetSnapshot {
    fn from(t: UserTarget) -> Self {
        Self {
            calorie_target: t.calorie_target,
            protein_target: t.protein_target,
            goal_weight: t.goal_weight,
        }
    }
}

/// GET /api/dashboard/summary
#[derive(Debug, Serialize)]
pub struct DashboardSummaryResponse {
    pub today: Option<TodayLog>,
    pub targets: Option<TargetSnapshot>,
    pub has_logged_today: bool,
}

/// GET /api/dashboard/trends query params
#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    /// 7, 14 or 30. Default: 7
    pub days: Option<i64>,
}

impl TrendQuery {
    /// Unsupported window sizes fall back to 7 days
    pub fn window_days(&self) -> i64 {
        match self.days {
            Some(days @ (7 | 14 | 30)) => days,
            _ => 7,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct WeightPoint {
    pub date: NaiveDate,
    pub weight: f64,
}

/// One row of GET /api/dashboard/monthly. `bmi_category` is an empty string
/// when BMI could not be computed.
#[derive(Debug, Serialize)]
pub struct MonthlyMetricsResponse {
    pub month: NaiveDate,
    pub avg_weight: Option<f64>,
    pub bmi: Option<f64>,
    pub bmi_category: String,
    pub weight_change: Option<f64>,
    pub consistency_score: i32,
    pub days_logged: i32,
    pub protein_hit_days: i32,
    pub workout_days: i32,
    pub total_days_in_month: i32,
}

impl From<MonthlyMetrics> for MonthlyMetricsResponse {
    fn from(m: MonthlyMetrics) -> Self {
        let s = m.summary;
        Self {
            month: s.month,
            avg_weight: s.avg_weight,
            bmi: s.bmi,
            bmi_category: s
                .bmi_category
                .map(|c| c.label().to_string())
                .unwrap_or_default(),
            weight_change: s.weight_change,
            consistency_score: s.consistency_score,
            days_logged: s.days_logged,
            protein_hit_days: s.protein_hit_days,
            workout_days: s.workout_days,
            total_days_in_month: s.total_days_in_month,
        }
    }
}
