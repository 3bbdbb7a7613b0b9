use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use chrono::Utc;
use serde_valid::Validate;
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Add person.", skip(form, pg_pool))]
#[post("")]
pub async fn add(
    form: web::Json<forms::PersonForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|errors| JsonResponse::<models::Person>::build().form_error(errors.to_string()))?;

    let person = models::Person {
        id: Uuid::new_v4(),
        name: form.name.trim().to_string(),
        budget: form.budget,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    db::person::insert(pg_pool.get_ref(), person)
        .await
        .map(|person| JsonResponse::build().set_item(person).ok("success"))
        .map_err(|err| JsonResponse::<models::Person>::build().internal_server_error(err))
}
