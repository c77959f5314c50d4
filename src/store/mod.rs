//! Storage collaborators consumed by the metrics services.
//!
//! Services only ever talk to these traits, so the engine can run against
//! Postgres in production and an in-memory map in tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::daily_log::DailyEntry;
use crate::models::measurement::BodyMeasurement;
use crate::models::monthly_metrics::MonthlyMetrics;
use crate::models::target::UserTarget;
use crate::models::user::UserProfile;

#[cfg(test)]
pub mod memory;

#[async_trait]
pub trait LogStore: Send + Sync {
    /// Entries with `start <= date <= end`, newest first.
    async fn entries_between(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DailyEntry>>;

    /// At most `limit` entries dated on or before `until`, newest first.
    async fn recent_entries(
        &self,
        user_id: Uuid,
        until: NaiveDate,
        limit: i64,
    ) -> AppResult<Vec<DailyEntry>>;

    async fn entry_on(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Option<DailyEntry>>;

    /// Insert or replace the entry for (user_id, date).
    async fn upsert_entry(&self, entry: &DailyEntry) -> AppResult<DailyEntry>;

    /// Returns false when nothing was deleted.
    async fn delete_entry(&self, user_id: Uuid, date: NaiveDate) -> AppResult<bool>;
}

#[async_trait]
pub trait TargetStore: Send + Sync {
    async fn target_for(&self, user_id: Uuid) -> AppResult<Option<UserTarget>>;
}

#[async_trait]
pub trait MeasurementStore: Send + Sync {
    async fn latest_measurement(&self, user_id: Uuid) -> AppResult<Option<BodyMeasurement>>;
}

#[async_trait]
pub trait MetricsStore: Send + Sync {
    async fn metrics_for_month(
        &self,
        user_id: Uuid,
        month: NaiveDate,
    ) -> AppResult<Option<MonthlyMetrics>>;

    /// Atomic insert-or-replace keyed by (user_id, month).
    async fn upsert_metrics(&self, metrics: &MonthlyMetrics) -> AppResult<MonthlyMetrics>;

    /// Most recent `limit` rows, ordered by month descending.
    async fn recent_metrics(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<MonthlyMetrics>>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Users eligible for the periodic recompute (active and onboarded).
    async fn active_user_ids(&self) -> AppResult<Vec<Uuid>>;
}

/// Everything the service needs from storage.
#[async_trait]
pub trait Store: LogStore + TargetStore + MeasurementStore + MetricsStore + UserStore {
    async fn ping(&self) -> AppResult<()>;
}
