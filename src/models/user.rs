use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// An invitee. The hex key is an opaque access token embedded in the public
/// URL and substitutes for login credentials.
#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub hex_key: String,
    pub view_only: bool,
    pub created_at: DateTime<Utc>,
}
