use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{patch, put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Update tracked gift.", skip(form, pg_pool))]
#[put("/{id}")]
pub async fn update(
    path: web::Path<Uuid>,
    form: web::Json<forms::PersonGiftForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    form.validate().map_err(|errors| {
        JsonResponse::<models::PersonGift>::build().form_error(errors.to_string())
    })?;

    let id = path.into_inner();
    let mut gift = db::person_gift::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::PersonGift>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::PersonGift>::build().not_found("not found"))?;

    gift.name = form.name.trim().to_string();
    gift.amount = form.amount;
    gift.status = form.status.clone();

    db::person_gift::update(pg_pool.get_ref(), gift)
        .await
        .map(|gift| JsonResponse::build().set_item(gift).ok("success"))
        .map_err(|err| JsonResponse::<models::PersonGift>::build().internal_server_error(err))
}

/// Quick status transition from the person card, without resending the
/// whole form.
#[tracing::instrument(name = "Update tracked gift status.", skip(form, pg_pool))]
#[patch("/{id}/status")]
pub async fn update_status(
    path: web::Path<Uuid>,
    form: web::Json<forms::StatusForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    form.validate().map_err(|errors| {
        JsonResponse::<models::PersonGift>::build().form_error(errors.to_string())
    })?;

    let id = path.into_inner();
    db::person_gift::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::PersonGift>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::PersonGift>::build().not_found("not found"))?;

    db::person_gift::update_status(pg_pool.get_ref(), id, &form.status)
        .await
        .map(|gift| JsonResponse::build().set_item(gift).ok("success"))
        .map_err(|err| JsonResponse::<models::PersonGift>::build().internal_server_error(err))
}
