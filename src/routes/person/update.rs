use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Update person.", skip(form, pg_pool))]
#[put("/{id}")]
pub async fn update(
    path: web::Path<Uuid>,
    form: web::Json<forms::PersonForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|errors| JsonResponse::<models::Person>::build().form_error(errors.to_string()))?;

    let id = path.into_inner();
    let mut person = db::person::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Person>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Person>::build().not_found("not found"))?;

    person.name = form.name.trim().to_string();
    person.budget = form.budget;

    db::person::update(pg_pool.get_ref(), person)
        .await
        .map(|person| JsonResponse::build().set_item(person).ok("success"))
        .map_err(|err| JsonResponse::<models::Person>::build().internal_server_error(err))
}
