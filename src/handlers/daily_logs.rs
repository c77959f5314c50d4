use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::{Duration, NaiveDate, Utc};

use crate::auth::middleware::AuthUser;
use crate::dto::{DeleteResponse, UpsertDailyLogRequest};
use crate::error::{AppError, AppResult};
use crate::models::daily_log::{DailyEntry, DailyLogQuery};
use crate::services::entries;
use crate::AppState;

/// Default lookback for the list endpoint when no range is given.
const DEFAULT_LIST_DAYS: i64 = 30;

pub async fn upsert_daily_log(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<UpsertDailyLogRequest>,
) -> AppResult<Json<DailyEntry>> {
    let entry = entries::upsert_entry(state.store.as_ref(), auth_user.id, body, Utc::now()).await?;
    tracing::debug!(
        user_id = %auth_user.id,
        date = %entry.date,
        protein_hit = entry.protein_hit,
        calories_ok = entry.calories_ok,
        "Daily log saved"
    );
    Ok(Json(entry))
}

pub async fn list_daily_logs(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<DailyLogQuery>,
) -> AppResult<Json<Vec<DailyEntry>>> {
    let today = Utc::now().date_naive();
    let start = query
        .start_date
        .unwrap_or_else(|| today - Duration::days(DEFAULT_LIST_DAYS));
    let end = query.end_date.unwrap_or(today);

    let logs = state
        .store
        .entries_between(auth_user.id, start, end)
        .await?;

    Ok(Json(logs))
}

pub async fn get_today_log(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<DailyEntry>> {
    let today = Utc::now().date_naive();
    let entry = state
        .store
        .entry_on(auth_user.id, today)
        .await?
        .ok_or(AppError::NotFound("No log for today".into()))?;

    Ok(Json(entry))
}

pub async fn delete_daily_log(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(date): Path<NaiveDate>,
) -> AppResult<Json<DeleteResponse>> {
    entries::delete_entry(
        state.store.as_ref(),
        auth_user.id,
        date,
        Utc::now().date_naive(),
    )
    .await?;

    Ok(Json(DeleteResponse {
        deleted: true,
        date,
    }))
}
