use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add gift.", skip(form, pg_pool))]
#[post("")]
pub async fn add(
    form: web::Json<forms::GiftForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|errors| JsonResponse::<models::Gift>::build().form_error(errors.to_string()))?;

    let gift: models::Gift = (&form.into_inner()).into();
    db::gift::insert(pg_pool.get_ref(), gift)
        .await
        .map(|gift| JsonResponse::build().set_item(gift).ok("success"))
        .map_err(|err| JsonResponse::<models::Gift>::build().internal_server_error(err))
}
