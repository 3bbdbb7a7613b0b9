use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::User>, String> {
    let query_span = tracing::info_span!("Fetch all users.");
    sqlx::query_as::<_, models::User>(
        r#"SELECT * FROM users ORDER BY created_at DESC"#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch users, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch_by_hex_key(pool: &PgPool, hex_key: &str) -> Result<Option<models::User>, String> {
    let query_span = tracing::info_span!("Fetch user by hex key.");
    sqlx::query_as::<_, models::User>(r#"SELECT * FROM users WHERE hex_key=$1 LIMIT 1"#)
        .bind(hex_key)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map(Some)
        .or_else(|err| match err {
            sqlx::Error::RowNotFound => Ok(None),
            e => {
                tracing::error!("Failed to fetch user, error: {:?}", e);
                Err("Could not fetch data".to_string())
            }
        })
}

pub async fn insert(pool: &PgPool, user: models::User) -> Result<models::User, String> {
    let query_span = tracing::info_span!("Saving new user into the database");
    sqlx::query_as::<_, models::User>(
        r#"
        INSERT INTO users (id, name, hex_key, view_only, created_at)
        VALUES ($1, $2, $3, $4, NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(user.id)
    .bind(user.name)
    .bind(user.hex_key)
    .bind(user.view_only)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

#[tracing::instrument(name = "Delete user.", skip(pool))]
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, String> {
    tracing::info!("Delete user {}", id);
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete user: {:?}", err);
            "Failed to delete user".to_string()
        })
}
