use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::Utc;

use crate::auth::middleware::AuthUser;
use crate::dto::{DashboardSummaryResponse, MonthlyMetricsResponse, TrendQuery, WeightPoint};
use crate::error::AppResult;
use crate::services::alerts::Alert;
use crate::services::dashboard;
use crate::services::streaks::Streaks;
use crate::AppState;

pub async fn get_summary(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<DashboardSummaryResponse>> {
    let today = Utc::now().date_naive();
    let summary = dashboard::summary(state.store.as_ref(), auth_user.id, today).await?;
    Ok(Json(summary))
}

pub async fn get_trends(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<TrendQuery>,
) -> AppResult<Json<Vec<WeightPoint>>> {
    let today = Utc::now().date_naive();
    let points = dashboard::weight_trend(
        state.store.as_ref(),
        auth_user.id,
        today,
        query.window_days(),
    )
    .await?;
    Ok(Json(points))
}

pub async fn get_streaks(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Streaks>> {
    let today = Utc::now().date_naive();
    let streaks = dashboard::streaks(state.store.as_ref(), auth_user.id, today).await?;
    Ok(Json(streaks))
}

pub async fn get_alerts(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<Alert>>> {
    let today = Utc::now().date_naive();
    let alerts = dashboard::alerts(state.store.as_ref(), auth_user.id, today).await?;
    Ok(Json(alerts))
}

pub async fn get_monthly(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<MonthlyMetricsResponse>>> {
    let history = dashboard::monthly_history(state.store.as_ref(), auth_user.id, Utc::now()).await?;
    Ok(Json(history))
}
