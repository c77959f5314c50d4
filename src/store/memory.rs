use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{LogStore, MeasurementStore, MetricsStore, Store, TargetStore, UserStore};
use crate::error::AppResult;
use crate::models::daily_log::DailyEntry;
use crate::models::measurement::BodyMeasurement;
use crate::models::monthly_metrics::MonthlyMetrics;
use crate::models::target::UserTarget;
use crate::models::user::UserProfile;

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, UserProfile>,
    targets: HashMap<Uuid, UserTarget>,
    entries: BTreeMap<(Uuid, NaiveDate), DailyEntry>,
    measurements: BTreeMap<(Uuid, NaiveDate), BodyMeasurement>,
    metrics: BTreeMap<(Uuid, NaiveDate), MonthlyMetrics>,
    metric_upserts: usize,
}

/// Map-backed store for tests. Mirrors the uniqueness keys of the SQL schema.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, user: UserProfile) {
        self.tables.lock().await.users.insert(user.id, user);
    }

    pub async fn set_target(&self, target: UserTarget) {
        self.tables.lock().await.targets.insert(target.user_id, target);
    }

    pub async fn insert_entry(&self, entry: DailyEntry) {
        self.tables
            .lock()
            .await
            .entries
            .insert((entry.user_id, entry.date), entry);
    }

    pub async fn insert_measurement(&self, measurement: BodyMeasurement) {
        self.tables
            .lock()
            .await
            .measurements
            .insert((measurement.user_id, measurement.date), measurement);
    }

    /// Number of metric upserts performed so far.
    pub async fn metric_upserts(&self) -> usize {
        self.tables.lock().await.metric_upserts
    }
}

#[async_trait]
impl LogStore for MemoryStore {
    async fn entries_between(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DailyEntry>> {
        if start > end {
            return Ok(Vec::new());
        }
        let tables = self.tables.lock().await;
        Ok(tables
            .entries
            .range((user_id, start)..=(user_id, end))
            .rev()
            .map(|(_, e)| e.clone())
            .collect())
    }

    async fn recent_entries(
        &self,
        user_id: Uuid,
        until: NaiveDate,
        limit: i64,
    ) -> AppResult<Vec<DailyEntry>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .entries
            .range((user_id, NaiveDate::MIN)..=(user_id, until))
            .rev()
            .take(limit.max(0) as usize)
            .map(|(_, e)| e.clone())
            .collect())
    }

    async fn entry_on(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Option<DailyEntry>> {
        Ok(self.tables.lock().await.entries.get(&(user_id, date)).cloned())
    }

    async fn upsert_entry(&self, entry: &DailyEntry) -> AppResult<DailyEntry> {
        self.tables
            .lock()
            .await
            .entries
            .insert((entry.user_id, entry.date), entry.clone());
        Ok(entry.clone())
    }

    async fn delete_entry(&self, user_id: Uuid, date: NaiveDate) -> AppResult<bool> {
        Ok(self
            .tables
            .lock()
            .await
            .entries
            .remove(&(user_id, date))
            .is_some())
    }
}

#[async_trait]
impl TargetStore for MemoryStore {
    async fn target_for(&self, user_id: Uuid) -> AppResult<Option<UserTarget>> {
        Ok(self.tables.lock().await.targets.get(&user_id).cloned())
    }
}

#[async_trait]
impl MeasurementStore for MemoryStore {
    async fn latest_measurement(&self, user_id: Uuid) -> AppResult<Option<BodyMeasurement>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .measurements
            .range((user_id, NaiveDate::MIN)..=(user_id, NaiveDate::MAX))
            .next_back()
            .map(|(_, m)| m.clone()))
    }
}

#[async_trait]
impl MetricsStore for MemoryStore {
    async fn metrics_for_month(
        &self,
        user_id: Uuid,
        month: NaiveDate,
    ) -> AppResult<Option<MonthlyMetrics>> {
        Ok(self.tables.lock().await.metrics.get(&(user_id, month)).cloned())
    }

    async fn upsert_metrics(&self, metrics: &MonthlyMetrics) -> AppResult<MonthlyMetrics> {
        let mut tables = self.tables.lock().await;
        tables.metric_upserts += 1;
        tables
            .metrics
            .insert((metrics.user_id, metrics.month()), metrics.clone());
        Ok(metrics.clone())
    }

    async fn recent_metrics(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<MonthlyMetrics>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .metrics
            .range((user_id, NaiveDate::MIN)..=(user_id, NaiveDate::MAX))
            .rev()
            .take(limit.max(0) as usize)
            .map(|(_, m)| m.clone())
            .collect())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(self.tables.lock().await.users.get(&user_id).cloned())
    }

    async fn active_user_ids(&self) -> AppResult<Vec<Uuid>> {
        let tables = self.tables.lock().await;
        let mut ids: Vec<Uuid> = tables
            .users
            .values()
            .filter(|u| u.is_active && u.is_onboarded)
            .map(|u| u.id)
            .collect();
        ids.sort();
        Ok(ids)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
