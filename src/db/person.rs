use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Person>, String> {
    let query_span = tracing::info_span!("Fetch all persons.");
    sqlx::query_as::<_, models::Person>(
        r#"SELECT * FROM persons ORDER BY created_at DESC"#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch persons, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<models::Person>, String> {
    tracing::info!("Fetch person {}", id);
    sqlx::query_as::<_, models::Person>(r#"SELECT * FROM persons WHERE id=$1 LIMIT 1"#)
        .bind(id)
        .fetch_one(pool)
        .await
        .map(Some)
        .or_else(|err| match err {
            sqlx::Error::RowNotFound => Ok(None),
            e => {
                tracing::error!("Failed to fetch person, error: {:?}", e);
                Err("Could not fetch data".to_string())
            }
        })
}

pub async fn insert(pool: &PgPool, person: models::Person) -> Result<models::Person, String> {
    let query_span = tracing::info_span!("Saving new person into the database");
    sqlx::query_as::<_, models::Person>(
        r#"
        INSERT INTO persons (id, name, budget, created_at, updated_at)
        VALUES ($1, $2, $3, NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(person.id)
    .bind(person.name)
    .bind(person.budget)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(pool: &PgPool, person: models::Person) -> Result<models::Person, String> {
    let query_span = tracing::info_span!("Updating person");
    sqlx::query_as::<_, models::Person>(
        r#"
        UPDATE persons
        SET
            name=$2,
            budget=$3,
            updated_at=NOW() at time zone 'utc'
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(person.id)
    .bind(person.name)
    .bind(person.budget)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not update".to_string()
    })
}

#[tracing::instrument(name = "Delete person.", skip(pool))]
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, String> {
    tracing::info!("Delete person {}", id);
    sqlx::query("DELETE FROM persons WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete person: {:?}", err);
            "Failed to delete person".to_string()
        })
}
