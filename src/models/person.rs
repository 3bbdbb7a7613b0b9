use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A person the admin buys gifts for, with an allotted budget. Part of the
/// private budget-tracking subsystem, unrelated to the public gift list.
#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub budget: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
