use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Update gift.", skip(form, pg_pool))]
#[put("/{id}")]
pub async fn update(
    path: web::Path<Uuid>,
    form: web::Json<forms::GiftForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|errors| JsonResponse::<models::Gift>::build().form_error(errors.to_string()))?;

    let id = path.into_inner();
    let mut gift = db::gift::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Gift>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<models::Gift>::build().not_found("not found"))?;

    let form = form.into_inner();
    gift.title = form.title.trim().to_string();
    gift.description = form.description.trim().to_string();
    gift.purchase_link = form.purchase_link.trim().to_string();
    gift.image_url = form.image_url.clone();
    gift.price = form.price;
    gift.categories = form.categories.clone();

    db::gift::update(pg_pool.get_ref(), gift)
        .await
        .map(|gift| JsonResponse::build().set_item(gift).ok("success"))
        .map_err(|err| JsonResponse::<models::Gift>::build().internal_server_error(err))
}
