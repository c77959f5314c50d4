use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::daily_log::DailyEntry;

/// How many of the most recent entries a streak is computed over. A single
/// missing day ends a streak, so older history can never extend one.
pub const STREAK_WINDOW: i64 = 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Streaks {
    pub protein_streak: u32,
    pub calorie_streak: u32,
    pub workout_streak: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakKind {
    Protein,
    Calories,
    Workout,
}

impl StreakKind {
    fn is_met(self, entry: &DailyEntry) -> bool {
        match self {
            Self::Protein => entry.protein_hit,
            Self::Calories => entry.calories_ok,
            Self::Workout => entry.workout,
        }
    }
}

/// Streaks ending today, or yesterday when today has no entry yet.
///
/// `entries` must be ordered newest first.
pub fn compute_streaks(entries: &[DailyEntry], today: NaiveDate) -> Streaks {
    Streaks {
        protein_streak: streak_count(entries, today, StreakKind::Protein),
        calorie_streak: streak_count(entries, today, StreakKind::Calories),
        workout_streak: streak_count(entries, today, StreakKind::Workout),
    }
}

pub fn streak_count(entries: &[DailyEntry], today: NaiveDate, kind: StreakKind) -> u32 {
    let one_day = Duration::days(1);
    let mut count = 0u32;
    let mut expected = today;

    for entry in entries {
        if entry.date == expected {
            if !kind.is_met(entry) {
                break;
            }
            count += 1;
            expected -= one_day;
        } else if entry.date < expected {
            // Grace applies once, and only before anything has been counted.
            if count > 0 || expected != today {
                break;
            }
            expected = today - one_day;
            if entry.date == expected && kind.is_met(entry) {
                count += 1;
                expected -= one_day;
            } else {
                break;
            }
        }
    }

    count
}
