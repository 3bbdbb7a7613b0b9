use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::PersonGift>, String> {
    let query_span = tracing::info_span!("Fetch all tracked gifts.");
    sqlx::query_as::<_, models::PersonGift>(
        r#"SELECT * FROM person_gifts ORDER BY created_at DESC"#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch tracked gifts, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch_by_person(
    pool: &PgPool,
    person_id: Uuid,
) -> Result<Vec<models::PersonGift>, String> {
    let query_span = tracing::info_span!("Fetch tracked gifts of a person.");
    sqlx::query_as::<_, models::PersonGift>(
        r#"SELECT * FROM person_gifts WHERE person_id=$1 ORDER BY created_at DESC"#,
    )
    .bind(person_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch tracked gifts, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<models::PersonGift>, String> {
    tracing::info!("Fetch tracked gift {}", id);
    sqlx::query_as::<_, models::PersonGift>(r#"SELECT * FROM person_gifts WHERE id=$1 LIMIT 1"#)
        .bind(id)
        .fetch_one(pool)
        .await
        .map(Some)
        .or_else(|err| match err {
            sqlx::Error::RowNotFound => Ok(None),
            e => {
                tracing::error!("Failed to fetch tracked gift, error: {:?}", e);
                Err("Could not fetch data".to_string())
            }
        })
}

pub async fn insert(
    pool: &PgPool,
    gift: models::PersonGift,
) -> Result<models::PersonGift, String> {
    let query_span = tracing::info_span!("Saving new tracked gift into the database");
    sqlx::query_as::<_, models::PersonGift>(
        r#"
        INSERT INTO person_gifts (id, person_id, name, amount, status, created_at)
        VALUES ($1, $2, $3, $4, $5, NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(gift.id)
    .bind(gift.person_id)
    .bind(gift.name)
    .bind(gift.amount)
    .bind(gift.status)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(
    pool: &PgPool,
    gift: models::PersonGift,
) -> Result<models::PersonGift, String> {
    let query_span = tracing::info_span!("Updating tracked gift");
    sqlx::query_as::<_, models::PersonGift>(
        r#"
        UPDATE person_gifts
        SET
            name=$2,
            amount=$3,
            status=$4
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(gift.id)
    .bind(gift.name)
    .bind(gift.amount)
    .bind(gift.status)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not update".to_string()
    })
}

pub async fn update_status(
    pool: &PgPool,
    id: Uuid,
    status: &str,
) -> Result<models::PersonGift, String> {
    let query_span = tracing::info_span!("Updating tracked gift status");
    sqlx::query_as::<_, models::PersonGift>(
        r#"
        UPDATE person_gifts
        SET status=$2
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(status)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not update".to_string()
    })
}

#[tracing::instrument(name = "Delete tracked gift.", skip(pool))]
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, String> {
    tracing::info!("Delete tracked gift {}", id);
    sqlx::query("DELETE FROM person_gifts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete tracked gift: {:?}", err);
            "Failed to delete tracked gift".to_string()
        })
}
