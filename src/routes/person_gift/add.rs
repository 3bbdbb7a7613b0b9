use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use chrono::Utc;
use serde_valid::Validate;
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Add tracked gift.", skip(form, pg_pool))]
#[post("")]
pub async fn add(
    form: web::Json<forms::PersonGiftForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    form.validate().map_err(|errors| {
        JsonResponse::<models::PersonGift>::build().form_error(errors.to_string())
    })?;

    db::person::fetch(pg_pool.get_ref(), form.person_id)
        .await
        .map_err(|err| JsonResponse::<models::PersonGift>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::PersonGift>::build().not_found("person not found"))?;

    let gift = models::PersonGift {
        id: Uuid::new_v4(),
        person_id: form.person_id,
        name: form.name.trim().to_string(),
        amount: form.amount,
        status: form.status.clone(),
        created_at: Utc::now(),
    };

    db::person_gift::insert(pg_pool.get_ref(), gift)
        .await
        .map(|gift| JsonResponse::build().set_item(gift).ok("success"))
        .map_err(|err| JsonResponse::<models::PersonGift>::build().internal_server_error(err))
}
