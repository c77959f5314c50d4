//! Read-side orchestration for the dashboard endpoints.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::dto::{DashboardSummaryResponse, MonthlyMetricsResponse, WeightPoint};
use crate::error::AppResult;
use crate::services::alerts::{alert_window_start, generate_alerts, Alert};
use crate::services::refresher::refresh_if_stale;
use crate::services::streaks::{compute_streaks, Streaks, STREAK_WINDOW};
use crate::store::Store;

/// Months returned by the history endpoint.
pub const MONTHLY_HISTORY_LIMIT: i64 = 12;

pub async fn summary(
    store: &dyn Store,
    user_id: Uuid,
    today: NaiveDate,
) -> AppResult<DashboardSummaryResponse> {
    let entry = store.entry_on(user_id, today).await?;
    let target = store.target_for(user_id).await?;

    Ok(DashboardSummaryResponse {
        has_logged_today: entry.is_some(),
        today: entry.map(Into::into),
        targets: target.map(Into::into),
    })
}

/// Weight points for the last `days` days, oldest first.
pub async fn weight_trend(
    store: &dyn Store,
    user_id: Uuid,
    today: NaiveDate,
    days: i64,
) -> AppResult<Vec<WeightPoint>> {
    let entries = store
        .entries_between(user_id, today - Duration::days(days), today)
        .await?;

    Ok(entries
        .into_iter()
        .rev()
        .map(|e| WeightPoint {
            date: e.date,
            weight: e.weight,
        })
        .collect())
}

pub async fn streaks(store: &dyn Store, user_id: Uuid, today: NaiveDate) -> AppResult<Streaks> {
    let entries = store.recent_entries(user_id, today, STREAK_WINDOW).await?;
    Ok(compute_streaks(&entries, today))
}

pub async fn alerts(store: &dyn Store, user_id: Uuid, today: NaiveDate) -> AppResult<Vec<Alert>> {
    let recent = store
        .entries_between(user_id, alert_window_start(today), today)
        .await?;
    let last_measurement = store.latest_measurement(user_id).await?;
    Ok(generate_alerts(&recent, last_measurement.as_ref(), today))
}

/// Stored monthly rollups, newest first. The current and previous month are
/// refreshed first when the stored row is missing or stale.
pub async fn monthly_history(
    store: &dyn Store,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> AppResult<Vec<MonthlyMetricsResponse>> {
    refresh_if_stale(store, user_id, now).await?;

    let rows = store.recent_metrics(user_id, MONTHLY_HISTORY_LIMIT).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}
