use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get all users.", skip(pg_pool))]
#[get("")]
pub async fn list(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::user::fetch_all(pg_pool.get_ref())
        .await
        .map(|users| JsonResponse::build().set_list(users).ok("OK"))
        .map_err(|err| JsonResponse::<models::User>::build().internal_server_error(err))
}
