use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A gift as stored in the database. Reservation status is never stored
/// here; it is derived from the `interests` rows referencing this gift.
#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Gift {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub purchase_link: String,
    pub image_url: Option<String>,
    pub price: f64,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
