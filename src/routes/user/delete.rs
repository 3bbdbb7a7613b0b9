use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Delete user.", skip(pg_pool))]
#[delete("/{id}")]
pub async fn delete(path: web::Path<Uuid>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let id = path.into_inner();
    db::user::delete(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::User>::build().internal_server_error(err))?
        .then_some(JsonResponse::<models::User>::build().ok("success"))
        .ok_or_else(|| JsonResponse::<models::User>::build().not_found("not found"))
}
