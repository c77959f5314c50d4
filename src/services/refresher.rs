use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::monthly_metrics::MonthlyMetrics;
use crate::services::monthly::{aggregate, MonthWindow};
use crate::store::Store;

/// Stored monthly metrics older than this are recomputed on read.
pub const STALE_AFTER_HOURS: i64 = 24;

/// Recompute and persist the metrics for the month containing `month`.
///
/// Reads the prior month's stored row for `weight_change`, so callers that
/// refresh several months should go oldest first.
pub async fn compute_monthly_metrics(
    store: &dyn Store,
    user_id: Uuid,
    month: NaiveDate,
    now: DateTime<Utc>,
) -> AppResult<MonthlyMetrics> {
    let window = MonthWindow::containing(month);

    // No profile row means no height, so BMI stays null.
    let height_cm = store.profile(user_id).await?.and_then(|p| p.height_cm);
    let entries = store.entries_between(user_id, window.first, window.last).await?;
    let previous = store
        .metrics_for_month(user_id, window.previous().first)
        .await?;

    let summary = aggregate(
        &entries,
        height_cm,
        previous.as_ref().map(|m| &m.summary),
        window.first,
    );

    store
        .upsert_metrics(&MonthlyMetrics::new(user_id, summary, now))
        .await
}

pub fn is_stale(stored: Option<&MonthlyMetrics>, now: DateTime<Utc>) -> bool {
    match stored {
        None => true,
        Some(metrics) => now - metrics.updated_at > Duration::hours(STALE_AFTER_HOURS),
    }
}

/// Recompute the previous and current month when the current month's row is
/// missing or stale. Returns whether anything was recomputed.
pub async fn refresh_if_stale(
    store: &dyn Store,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> AppResult<bool> {
    let current = MonthWindow::containing(now.date_naive());
    let stored = store.metrics_for_month(user_id, current.first).await?;

    if !is_stale(stored.as_ref(), now) {
        tracing::debug!(user_id = %user_id, month = %current.first, "Monthly metrics fresh");
        return Ok(false);
    }

    recompute_recent_months(store, user_id, now).await?;
    tracing::info!(user_id = %user_id, month = %current.first, "Monthly metrics recomputed");
    Ok(true)
}

async fn recompute_recent_months(
    store: &dyn Store,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> AppResult<()> {
    let current = MonthWindow::containing(now.date_naive());
    compute_monthly_metrics(store, user_id, current.previous().first, now).await?;
    compute_monthly_metrics(store, user_id, current.first, now).await?;
    Ok(())
}

/// Recompute current and previous month for every active, onboarded user.
/// A failure for one user is logged and does not stop the others.
pub async fn recompute_all_users(store: &dyn Store, now: DateTime<Utc>) -> AppResult<usize> {
    let user_ids = store.active_user_ids().await?;
    let mut computed = 0;

    for user_id in user_ids {
        match recompute_recent_months(store, user_id, now).await {
            Ok(()) => computed += 1,
            Err(e) => {
                tracing::error!(user_id = %user_id, error = %e, "Monthly metrics recompute failed");
            }
        }
    }

    Ok(computed)
}

/// Periodic recompute for all users. A zero period is treated as one second.
pub fn spawn_monthly_metrics_worker(store: Arc<dyn Store>, interval_secs: u64) -> JoinHandle<()> {
    let period = std::time::Duration::from_secs(interval_secs.max(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            match recompute_all_users(store.as_ref(), Utc::now()).await {
                Ok(count) => {
                    tracing::info!(users = count, "Monthly metrics worker: recomputed");
                }
                Err(e) => {
                    tracing::error!(error = %e, "Monthly metrics worker error");
                }
            }
        }
    })
}
