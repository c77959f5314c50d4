use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The slice of the user record the metrics engine reads. Accounts
/// themselves are managed by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    pub height_cm: Option<f64>,
    pub is_active: bool,
    pub is_onboarded: bool,
}
