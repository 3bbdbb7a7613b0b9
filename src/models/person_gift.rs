use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const STATUS_IDEA: &str = "Idée";
pub const STATUS_ORDERED: &str = "Commandé";
pub const STATUS_DELIVERED: &str = "Livré";

/// A planned or purchased gift for a person, counted against their budget.
#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PersonGift {
    pub id: Uuid,
    pub person_id: Uuid,
    pub name: String,
    pub amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
