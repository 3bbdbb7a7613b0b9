use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn fetch_all_with_users(
    pool: &PgPool,
) -> Result<Vec<models::InterestWithUser>, String> {
    let query_span = tracing::info_span!("Fetch all interests with user names.");
    sqlx::query_as::<_, models::InterestWithUser>(
        r#"
        SELECT i.id, i.gift_id, i.user_id, u.name AS user_name, i.created_at
        FROM interests i
        JOIN users u ON u.id = i.user_id
        ORDER BY i.created_at
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch interests, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch_by_gift(
    pool: &PgPool,
    gift_id: Uuid,
) -> Result<Vec<models::InterestWithUser>, String> {
    let query_span = tracing::info_span!("Fetch interests of a gift.");
    sqlx::query_as::<_, models::InterestWithUser>(
        r#"
        SELECT i.id, i.gift_id, i.user_id, u.name AS user_name, i.created_at
        FROM interests i
        JOIN users u ON u.id = i.user_id
        WHERE i.gift_id = $1
        ORDER BY i.created_at
        "#,
    )
    .bind(gift_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch interests, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(
    pool: &PgPool,
    gift_id: Uuid,
    user_id: Uuid,
) -> Result<models::Interest, String> {
    let query_span = tracing::info_span!("Saving new interest into the database");
    sqlx::query_as::<_, models::Interest>(
        r#"
        INSERT INTO interests (id, gift_id, user_id, created_at)
        VALUES ($1, $2, $3, NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(gift_id)
    .bind(user_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

/// Removes the viewer's own claim only; other users' rows are never touched.
#[tracing::instrument(name = "Delete own interest.", skip(pool))]
pub async fn delete_own(pool: &PgPool, gift_id: Uuid, user_id: Uuid) -> Result<bool, String> {
    sqlx::query("DELETE FROM interests WHERE gift_id = $1 AND user_id = $2")
        .bind(gift_id)
        .bind(user_id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete interest: {:?}", err);
            "Failed to delete interest".to_string()
        })
}
