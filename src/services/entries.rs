//! Write path for daily entries. The evaluator runs explicitly on every
//! upsert so stored flags always reflect the targets at write time.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::dto::UpsertDailyLogRequest;
use crate::error::{AppError, AppResult};
use crate::models::daily_log::DailyEntry;
use crate::services::evaluator::evaluate_or_default;
use crate::store::Store;

/// Entries dated more than this many days before today are frozen.
pub const EDIT_WINDOW_DAYS: i64 = 7;

pub fn ensure_not_future(date: NaiveDate, today: NaiveDate) -> AppResult<()> {
    if date > today {
        return Err(AppError::Validation("Future dates are not allowed".into()));
    }
    Ok(())
}

pub fn ensure_editable(date: NaiveDate, today: NaiveDate) -> AppResult<()> {
    if (today - date).num_days() > EDIT_WINDOW_DAYS {
        return Err(AppError::Forbidden(format!(
            "Logs older than {} days cannot be modified",
            EDIT_WINDOW_DAYS
        )));
    }
    Ok(())
}

/// Create or replace the entry for the request's date.
///
/// New entries may be back-dated freely; replacing an existing one is only
/// allowed inside the edit window.
pub async fn upsert_entry(
    store: &dyn Store,
    user_id: Uuid,
    req: UpsertDailyLogRequest,
    now: DateTime<Utc>,
) -> AppResult<DailyEntry> {
    req.validate()?;

    let today = now.date_naive();
    let date = req.date.unwrap_or(today);
    ensure_not_future(date, today)?;

    let existing = store.entry_on(user_id, date).await?;
    if existing.is_some() {
        ensure_editable(date, today)?;
    }

    let target = store.target_for(user_id).await?;
    let evaluation = evaluate_or_default(req.protein, req.calories, target.as_ref());
    if target.is_none() {
        tracing::debug!(user_id = %user_id, date = %date, "No targets set, skipping evaluation");
    }

    let (id, created_at) = existing
        .map(|e| (e.id, e.created_at))
        .unwrap_or_else(|| (Uuid::new_v4(), now));

    let entry = DailyEntry {
        id,
        user_id,
        date,
        weight: req.weight,
        calories: req.calories,
        protein: req.protein,
        carbs: req.carbs,
        fats: req.fats,
        steps: req.steps,
        water: req.water,
        sleep: req.sleep,
        workout: req.workout,
        cardio: req.cardio,
        fruit: req.fruit,
        protein_hit: evaluation.protein_hit,
        calories_ok: evaluation.calories_ok,
        created_at,
        updated_at: now,
    };

    store.upsert_entry(&entry).await
}

pub async fn delete_entry(
    store: &dyn Store,
    user_id: Uuid,
    date: NaiveDate,
    today: NaiveDate,
) -> AppResult<()> {
    store
        .entry_on(user_id, date)
        .await?
        .ok_or(AppError::NotFound("Log not found".into()))?;
    ensure_editable(date, today)?;

    // A concurrent delete may have removed the row since the lookup.
    if !store.delete_entry(user_id, date).await? {
        return Err(AppError::NotFound("Log not found".into()));
    }
    tracing::info!(user_id = %user_id, date = %date, "Daily log deleted");
    Ok(())
}
