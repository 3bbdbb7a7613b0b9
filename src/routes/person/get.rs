use crate::db;
use crate::helpers::JsonResponse;
use crate::views::person::{with_stats, PersonDetail, PersonWithStats};
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use uuid::Uuid;

/// Every person with their budget stats. Tracked gifts are fetched once and
/// grouped in memory.
#[tracing::instrument(name = "Get all persons.", skip(pg_pool))]
#[get("")]
pub async fn list(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let persons = db::person::fetch_all(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<PersonWithStats>::build().internal_server_error(err))?;
    let gifts = db::person_gift::fetch_all(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<PersonWithStats>::build().internal_server_error(err))?;

    let stats = persons
        .into_iter()
        .map(|person| {
            let own: Vec<_> = gifts
                .iter()
                .filter(|gift| gift.person_id == person.id)
                .cloned()
                .collect();
            with_stats(person, &own)
        })
        .collect();

    Ok(JsonResponse::build().set_list(stats).ok("OK"))
}

#[tracing::instrument(name = "Get person.", skip(pg_pool))]
#[get("/{id}")]
pub async fn item(path: web::Path<Uuid>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let id = path.into_inner();
    let person = db::person::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<PersonDetail>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<PersonDetail>::build().not_found("not found"))?;

    let gifts = db::person_gift::fetch_by_person(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<PersonDetail>::build().internal_server_error(err))?;

    let detail = PersonDetail {
        stats: with_stats(person, &gifts),
        gifts,
    };

    Ok(JsonResponse::build().set_item(detail).ok("OK"))
}
