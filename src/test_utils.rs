//! Fixtures shared by unit tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::config::Config;
use crate::models::daily_log::DailyEntry;
use crate::models::measurement::BodyMeasurement;
use crate::models::target::UserTarget;
use crate::models::user::UserProfile;

pub fn user_id() -> Uuid {
    Uuid::from_u128(0x5eed_0000_0000_0000_0000_0000_0000_0001)
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(y: i32, m: u32, d: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// An 80 kg entry with every flag off.
pub fn entry(date: NaiveDate) -> DailyEntry {
    let created = at(2024, 1, 1, 0);
    DailyEntry {
        id: Uuid::new_v4(),
        user_id: user_id(),
        date,
        weight: 80.0,
        calories: 2000,
        protein: 100,
        carbs: None,
        fats: None,
        steps: 8000,
        water: 2.0,
        sleep: 7.5,
        workout: false,
        cardio: false,
        fruit: false,
        protein_hit: false,
        calories_ok: false,
        created_at: created,
        updated_at: created,
    }
}

pub fn flagged(date: NaiveDate, protein_hit: bool, calories_ok: bool, workout: bool) -> DailyEntry {
    DailyEntry {
        protein_hit,
        calories_ok,
        workout,
        ..entry(date)
    }
}

pub fn weighed(date: NaiveDate, weight: f64) -> DailyEntry {
    DailyEntry {
        weight,
        ..entry(date)
    }
}

pub fn profile(height_cm: Option<f64>) -> UserProfile {
    UserProfile {
        id: user_id(),
        height_cm,
        is_active: true,
        is_onboarded: true,
    }
}

pub fn target() -> UserTarget {
    UserTarget {
        user_id: user_id(),
        calorie_target: 2000,
        protein_target: 150,
        goal_weight: 75.0,
        updated_at: at(2024, 1, 1, 0),
    }
}

pub fn measurement(date: NaiveDate) -> BodyMeasurement {
    BodyMeasurement {
        id: Uuid::new_v4(),
        user_id: user_id(),
        date,
        neck: Some(38.0),
        chest: None,
        shoulders: None,
        bicep: None,
        forearm: None,
        waist: Some(84.5),
        hips: None,
        thigh: None,
        created_at: at(2024, 1, 1, 0),
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/fitlog_test".into(),
        host: "127.0.0.1".into(),
        port: 0,
        frontend_url: "http://localhost:3000".into(),
        cors_extra_origins: Vec::new(),
        jwt_secret: "test-secret".into(),
        metrics_worker_enabled: false,
        metrics_worker_interval_secs: 3600,
    }
}
