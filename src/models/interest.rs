use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A user's claim of intent to purchase a gift. Several users may hold an
/// interest in the same gift at the same time; that is allowed by design.
#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    pub id: Uuid,
    pub gift_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Interest row joined with the claiming user's name, as needed by the
/// public gift list and the conflict-confirmation dialog.
#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InterestWithUser {
    pub id: Uuid,
    pub gift_id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}
