//! Monthly rollup of daily entries: average weight, BMI, consistency score.

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::models::daily_log::DailyEntry;
use crate::models::monthly_metrics::{BmiCategory, MonthlySummary};

// Consistency score weights; they sum to 100.
const COVERAGE_WEIGHT: f64 = 40.0;
const PROTEIN_WEIGHT: f64 = 30.0;
const WORKOUT_WEIGHT: f64 = 30.0;

/// A calendar month, identified by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub first: NaiveDate,
    pub last: NaiveDate,
    pub days: u32,
}

impl MonthWindow {
    pub fn containing(date: NaiveDate) -> Self {
        let first = first_of_month(date);
        let last = first
            .checked_add_months(Months::new(1))
            .map(|next| next - Duration::days(1))
            .unwrap_or(NaiveDate::MAX);
        Self {
            first,
            last,
            days: ((last - first).num_days() + 1) as u32,
        }
    }

    pub fn previous(&self) -> Self {
        Self::containing(self.first - Duration::days(1))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Round to an integer, ties to even.
fn round_half_even(value: f64) -> f64 {
    let rounded = value.round();
    if (rounded - value).abs() == 0.5 {
        2.0 * (value / 2.0).round()
    } else {
        rounded
    }
}

/// Nearest tenth of the exact binary value, ties to even. Float formatting
/// rounds that way, so this avoids the error `value * 10.0` introduces.
fn round1(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Weights are recorded to one decimal place.
fn to_tenths(weight: f64) -> i64 {
    (weight * 10.0).round() as i64
}

/// `sum / count` rounded to an integer, ties to even.
fn div_half_even(sum: i64, count: i64) -> i64 {
    let quotient = sum.div_euclid(count);
    let twice_remainder = 2 * sum.rem_euclid(count);
    if twice_remainder > count || (twice_remainder == count && quotient % 2 != 0) {
        quotient + 1
    } else {
        quotient
    }
}

/// Summarise the entries falling inside the month containing `month`.
///
/// `previous` is the stored summary of the prior month, used only for
/// `weight_change`. Entries outside the month are ignored. The result depends
/// on nothing but the arguments, so recomputing is always safe.
pub fn aggregate(
    entries: &[DailyEntry],
    height_cm: Option<f64>,
    previous: Option<&MonthlySummary>,
    month: NaiveDate,
) -> MonthlySummary {
    let window = MonthWindow::containing(month);
    let in_month: Vec<&DailyEntry> = entries.iter().filter(|e| window.contains(e.date)).collect();

    let days_logged = in_month.len();
    let protein_hit_days = in_month.iter().filter(|e| e.protein_hit).count();
    let workout_days = in_month.iter().filter(|e| e.workout).count();

    // Average on exact tenths so ties are decided on the decimal value.
    let avg_tenths = if days_logged == 0 {
        None
    } else {
        let total: i64 = in_month.iter().map(|e| to_tenths(e.weight)).sum();
        Some(div_half_even(total, days_logged as i64))
    };
    let avg_weight = avg_tenths.map(|t| t as f64 / 10.0);

    let consistency_score = consistency_score(days_logged, protein_hit_days, workout_days, window.days);

    let bmi = match (avg_weight, height_cm) {
        (Some(weight), Some(height)) if height > 0.0 => {
            let height_m = height / 100.0;
            Some(round1(weight / (height_m * height_m)))
        }
        _ => None,
    };

    // Both averages are whole tenths, so the difference needs no rounding.
    let weight_change = match (avg_tenths, previous.and_then(|p| p.avg_weight)) {
        (Some(current), Some(prior)) => Some((current - to_tenths(prior)) as f64 / 10.0),
        _ => None,
    };

    MonthlySummary {
        month: window.first,
        avg_weight,
        bmi,
        bmi_category: bmi.map(BmiCategory::from_bmi),
        weight_change,
        consistency_score,
        days_logged: days_logged as i32,
        protein_hit_days: protein_hit_days as i32,
        workout_days: workout_days as i32,
        total_days_in_month: window.days as i32,
    }
}

/// Weighted blend of logging coverage, protein adherence and workout
/// adherence, in 0..=100. Zero when nothing was logged. Rounds half to even.
pub fn consistency_score(
    days_logged: usize,
    protein_hit_days: usize,
    workout_days: usize,
    total_days: u32,
) -> i32 {
    if days_logged == 0 || total_days == 0 {
        return 0;
    }
    let logged = days_logged as f64;
    let score = (logged / f64::from(total_days)) * COVERAGE_WEIGHT
        + (protein_hit_days as f64 / logged) * PROTEIN_WEIGHT
        + (workout_days as f64 / logged) * WORKOUT_WEIGHT;
    round_half_even(score).clamp(0.0, 100.0) as i32
}
