use serde::Serialize;

use crate::models::target::UserTarget;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DailyEvaluation {
    pub protein_hit: bool,
    pub calories_ok: bool,
}

/// Compare one day's intake against the user's targets.
///
/// The calorie band is inclusive: with a 2000 kcal target anything in
/// 1800..=2200 counts as on target. Integer arithmetic keeps the boundary exact.
pub fn evaluate(protein: i32, calories: i32, target: &UserTarget) -> DailyEvaluation {
    let protein_hit = protein >= target.protein_target;

    let deviation = (i64::from(calories) - i64::from(target.calorie_target)).abs();
    // |calories - target| <= 10% of target
    let calories_ok = deviation * 10 <= i64::from(target.calorie_target);

    DailyEvaluation {
        protein_hit,
        calories_ok,
    }
}

/// Users without targets get both flags left at false.
pub fn evaluate_or_default(
    protein: i32,
    calories: i32,
    target: Option<&UserTarget>,
) -> DailyEvaluation {
    target
        .map(|t| evaluate(protein, calories, t))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn target(calorie_target: i32, protein_target: i32) -> UserTarget {
        UserTarget {
            user_id: Uuid::nil(),
            calorie_target,
            protein_target,
            goal_weight: 75.0,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_calorie_band_is_inclusive_at_ten_percent() {
        let t = target(2000, 150);
        assert!(evaluate(150, 2200, &t).calories_ok);
        assert!(evaluate(150, 1800, &t).calories_ok);
        assert!(!evaluate(150, 2201, &t).calories_ok);
        assert!(!evaluate(150, 1799, &t).calories_ok);
    }

    #[test]
    fn test_protein_hit_boundary() {
        let t = target(2000, 150);
        assert!(evaluate(150, 2000, &t).protein_hit);
        assert!(!evaluate(149, 2000, &t).protein_hit);
    }

    #[test]
    fn test_flags_are_independent() {
        let t = target(2000, 150);
        assert_eq!(
            evaluate(100, 2500, &t),
            DailyEvaluation {
                protein_hit: false,
                calories_ok: false
            }
        );
        assert_eq!(
            evaluate(160, 2150, &t),
            DailyEvaluation {
                protein_hit: true,
                calories_ok: true
            }
        );
    }

    #[test]
    fn test_missing_target_leaves_flags_false() {
        let eval = evaluate_or_default(500, 2000, None);
        assert!(!eval.protein_hit);
        assert!(!eval.calories_ok);
    }
}
