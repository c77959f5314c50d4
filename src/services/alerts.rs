use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::daily_log::DailyEntry;
use crate::models::measurement::BodyMeasurement;

/// Entries dated on or after `today - ALERT_WINDOW_DAYS` are considered recent.
pub const ALERT_WINDOW_DAYS: i64 = 7;
const OFF_TARGET_DAYS_THRESHOLD: usize = 3;
const MISSED_WORKOUT_DAYS_THRESHOLD: usize = 5;
const MEASUREMENT_STALE_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    fn warning(message: String) -> Self {
        Self {
            kind: AlertKind::Warning,
            message,
        }
    }

    fn info(message: String) -> Self {
        Self {
            kind: AlertKind::Info,
            message,
        }
    }
}

pub fn alert_window_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(ALERT_WINDOW_DAYS)
}

/// Calorie, workout and measurement alerts, in that order. Rules are
/// evaluated independently; none suppresses another.
pub fn generate_alerts(
    recent_entries: &[DailyEntry],
    last_measurement: Option<&BodyMeasurement>,
    today: NaiveDate,
) -> Vec<Alert> {
    let window_start = alert_window_start(today);
    let recent: Vec<&DailyEntry> = recent_entries
        .iter()
        .filter(|e| e.date >= window_start && e.date <= today)
        .collect();

    let mut alerts = Vec::new();

    let off_target_days = recent.iter().filter(|e| !e.calories_ok).count();
    if off_target_days >= OFF_TARGET_DAYS_THRESHOLD {
        alerts.push(Alert::warning(format!(
            "{} days off calorie target in the last week",
            off_target_days
        )));
    }

    let no_workout_days = recent.iter().filter(|e| !e.workout).count();
    if no_workout_days >= MISSED_WORKOUT_DAYS_THRESHOLD {
        alerts.push(Alert::warning(format!(
            "No workouts in {} days",
            no_workout_days
        )));
    }

    match last_measurement {
        Some(measurement) => {
            let days_since = (today - measurement.date).num_days();
            if days_since >= MEASUREMENT_STALE_DAYS {
                alerts.push(Alert::info(format!(
                    "No body measurement in {} days",
                    days_since
                )));
            }
        }
        None => alerts.push(Alert::info("No body measurements recorded yet".into())),
    }

    alerts
}
