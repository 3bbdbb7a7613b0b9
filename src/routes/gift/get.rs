use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Get gift.", skip(pg_pool))]
#[get("/{id}")]
pub async fn item(path: web::Path<Uuid>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let id = path.into_inner();
    db::gift::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Gift>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Gift>::build().not_found("not found"))
        .map(|gift| JsonResponse::build().set_item(gift).ok("OK"))
}

#[tracing::instrument(name = "Get all gifts.", skip(pg_pool))]
#[get("")]
pub async fn list(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::gift::fetch_all(pg_pool.get_ref())
        .await
        .map(|gifts| JsonResponse::build().set_list(gifts).ok("OK"))
        .map_err(|err| JsonResponse::<models::Gift>::build().internal_server_error(err))
}
