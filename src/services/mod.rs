pub mod alerts;
pub mod dashboard;
pub mod entries;
pub mod evaluator;
pub mod monthly;
pub mod refresher;
pub mod streaks;
