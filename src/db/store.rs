use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::daily_log::DailyEntry;
use crate::models::measurement::BodyMeasurement;
use crate::models::monthly_metrics::MonthlyMetrics;
use crate::models::target::UserTarget;
use crate::models::user::UserProfile;
use crate::store::{LogStore, MeasurementStore, MetricsStore, Store, TargetStore, UserStore};

const METRICS_COLUMNS: &str = r#"
    user_id, month, avg_weight, bmi, bmi_category, weight_change, consistency_score,
    days_logged, protein_hit_days, workout_days, total_days_in_month, updated_at
"#;

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LogStore for PgStore {
    async fn entries_between(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DailyEntry>> {
        let entries = sqlx::query_as::<_, DailyEntry>(
            r#"
            SELECT * FROM daily_logs
            WHERE user_id = $1 AND log_date BETWEEN $2 AND $3
            ORDER BY log_date DESC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }

    async fn recent_entries(
        &self,
        user_id: Uuid,
        until: NaiveDate,
        limit: i64,
    ) -> AppResult<Vec<DailyEntry>> {
        let entries = sqlx::query_as::<_, DailyEntry>(
            r#"
            SELECT * FROM daily_logs
            WHERE user_id = $1 AND log_date <= $2
            ORDER BY log_date DESC
            LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(until)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }

    async fn entry_on(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Option<DailyEntry>> {
        let entry = sqlx::query_as::<_, DailyEntry>(
            "SELECT * FROM daily_logs WHERE user_id = $1 AND log_date = $2",
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(&self.db)
        .await?;

        Ok(entry)
    }

    async fn upsert_entry(&self, entry: &DailyEntry) -> AppResult<DailyEntry> {
        let saved = sqlx::query_as::<_, DailyEntry>(
            r#"
            INSERT INTO daily_logs (
                id, user_id, log_date, weight, calories, protein, carbs, fats, steps,
                water, sleep, workout, cardio, fruit, protein_hit, calories_ok,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            ON CONFLICT (user_id, log_date) DO UPDATE SET
                weight = EXCLUDED.weight,
                calories = EXCLUDED.calories,
                protein = EXCLUDED.protein,
                carbs = EXCLUDED.carbs,
                fats = EXCLUDED.fats,
                steps = EXCLUDED.steps,
                water = EXCLUDED.water,
                sleep = EXCLUDED.sleep,
                workout = EXCLUDED.workout,
                cardio = EXCLUDED.cardio,
                fruit = EXCLUDED.fruit,
                protein_hit = EXCLUDED.protein_hit,
                calories_ok = EXCLUDED.calories_ok,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(entry.id)
        .bind(entry.user_id)
        .bind(entry.date)
        .bind(entry.weight)
        .bind(entry.calories)
        .bind(entry.protein)
        .bind(entry.carbs)
        .bind(entry.fats)
        .bind(entry.steps)
        .bind(entry.water)
        .bind(entry.sleep)
        .bind(entry.workout)
        .bind(entry.cardio)
        .bind(entry.fruit)
        .bind(entry.protein_hit)
        .bind(entry.calories_ok)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .fetch_one(&self.db)
        .await?;

        Ok(saved)
    }

    async fn delete_entry(&self, user_id: Uuid, date: NaiveDate) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM daily_logs WHERE user_id = $1 AND log_date = $2")
            .bind(user_id)
            .bind(date)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl TargetStore for PgStore {
    async fn target_for(&self, user_id: Uuid) -> AppResult<Option<UserTarget>> {
        let target = sqlx::query_as::<_, UserTarget>(
            r#"
            SELECT user_id, calorie_target, protein_target, goal_weight, updated_at
            FROM user_targets WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(target)
    }
}

#[async_trait]
impl MeasurementStore for PgStore {
    async fn latest_measurement(&self, user_id: Uuid) -> AppResult<Option<BodyMeasurement>> {
        let measurement = sqlx::query_as::<_, BodyMeasurement>(
            r#"
            SELECT * FROM body_measurements
            WHERE user_id = $1
            ORDER BY measured_on DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(measurement)
    }
}

#[async_trait]
impl MetricsStore for PgStore {
    async fn metrics_for_month(
        &self,
        user_id: Uuid,
        month: NaiveDate,
    ) -> AppResult<Option<MonthlyMetrics>> {
        let metrics = sqlx::query_as::<_, MonthlyMetrics>(&format!(
            "SELECT {METRICS_COLUMNS} FROM monthly_metrics WHERE user_id = $1 AND month = $2"
        ))
        .bind(user_id)
        .bind(month)
        .fetch_optional(&self.db)
        .await?;

        Ok(metrics)
    }

    async fn upsert_metrics(&self, metrics: &MonthlyMetrics) -> AppResult<MonthlyMetrics> {
        let s = &metrics.summary;
        let saved = sqlx::query_as::<_, MonthlyMetrics>(&format!(
            r#"
            INSERT INTO monthly_metrics (
                user_id, month, avg_weight, bmi, bmi_category, weight_change, consistency_score,
                days_logged, protein_hit_days, workout_days, total_days_in_month, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (user_id, month) DO UPDATE SET
                avg_weight = EXCLUDED.avg_weight,
                bmi = EXCLUDED.bmi,
                bmi_category = EXCLUDED.bmi_category,
                weight_change = EXCLUDED.weight_change,
                consistency_score = EXCLUDED.consistency_score,
                days_logged = EXCLUDED.days_logged,
                protein_hit_days = EXCLUDED.protein_hit_days,
                workout_days = EXCLUDED.workout_days,
                total_days_in_month = EXCLUDED.total_days_in_month,
                updated_at = EXCLUDED.updated_at
            RETURNING {METRICS_COLUMNS}
            "#
        ))
        .bind(metrics.user_id)
        .bind(s.month)
        .bind(s.avg_weight)
        .bind(s.bmi)
        .bind(s.bmi_category)
        .bind(s.weight_change)
        .bind(s.consistency_score)
        .bind(s.days_logged)
        .bind(s.protein_hit_days)
        .bind(s.workout_days)
        .bind(s.total_days_in_month)
        .bind(metrics.updated_at)
        .fetch_one(&self.db)
        .await?;

        Ok(saved)
    }

    async fn recent_metrics(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<MonthlyMetrics>> {
        let rows = sqlx::query_as::<_, MonthlyMetrics>(&format!(
            r#"
            SELECT {METRICS_COLUMNS} FROM monthly_metrics
            WHERE user_id = $1
            ORDER BY month DESC
            LIMIT $2
            "#
        ))
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        let profile = sqlx::query_as::<_, UserProfile>(
            "SELECT id, height_cm, is_active, is_onboarded FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(profile)
    }

    async fn active_user_ids(&self) -> AppResult<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM users WHERE is_active = true AND is_onboarded = true ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(ids)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.db)
            .await?;
        Ok(())
    }
}
