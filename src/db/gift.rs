use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Gift>, String> {
    let query_span = tracing::info_span!("Fetch all gifts.");
    sqlx::query_as::<_, models::Gift>(
        r#"SELECT * FROM gifts ORDER BY created_at DESC"#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch gifts, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<models::Gift>, String> {
    tracing::info!("Fetch gift {}", id);
    sqlx::query_as::<_, models::Gift>(r#"SELECT * FROM gifts WHERE id=$1 LIMIT 1"#)
        .bind(id)
        .fetch_one(pool)
        .await
        .map(Some)
        .or_else(|err| match err {
            sqlx::Error::RowNotFound => Ok(None),
            e => {
                tracing::error!("Failed to fetch gift, error: {:?}", e);
                Err("Could not fetch data".to_string())
            }
        })
}

pub async fn insert(pool: &PgPool, gift: models::Gift) -> Result<models::Gift, String> {
    let query_span = tracing::info_span!("Saving new gift into the database");
    sqlx::query_as::<_, models::Gift>(
        r#"
        INSERT INTO gifts (id, title, description, purchase_link, image_url, price, categories,
                           created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(gift.id)
    .bind(gift.title)
    .bind(gift.description)
    .bind(gift.purchase_link)
    .bind(gift.image_url)
    .bind(gift.price)
    .bind(gift.categories)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(pool: &PgPool, gift: models::Gift) -> Result<models::Gift, String> {
    let query_span = tracing::info_span!("Updating gift");
    sqlx::query_as::<_, models::Gift>(
        r#"
        UPDATE gifts
        SET
            title=$2,
            description=$3,
            purchase_link=$4,
            image_url=$5,
            price=$6,
            categories=$7,
            updated_at=NOW() at time zone 'utc'
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(gift.id)
    .bind(gift.title)
    .bind(gift.description)
    .bind(gift.purchase_link)
    .bind(gift.image_url)
    .bind(gift.price)
    .bind(gift.categories)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|updated| {
        tracing::info!("Gift {} has been saved", updated.id);
        updated
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not update".to_string()
    })
}

#[tracing::instrument(name = "Delete gift.", skip(pool))]
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, String> {
    tracing::info!("Delete gift {}", id);
    sqlx::query("DELETE FROM gifts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete gift: {:?}", err);
            "Failed to delete gift".to_string()
        })
}
