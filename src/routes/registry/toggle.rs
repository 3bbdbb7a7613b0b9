use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::views::registry::{decide_toggle, ToggleAction, ToggleOutcome};
use actix_web::{post, web, Responder, Result};
use sqlx::PgPool;

/// Flips the viewer's claim on a gift. When the gift is already claimed by
/// someone else the first attempt commits nothing and reports who holds it;
/// resending with `confirm` records the co-reservation anyway.
#[tracing::instrument(name = "Toggle reservation.", skip(form, pg_pool))]
#[post("/{hex_key}/toggle")]
pub async fn toggle(
    path: web::Path<String>,
    form: web::Json<forms::ToggleForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let hex_key = path.into_inner();
    let user = db::user::fetch_by_hex_key(pg_pool.get_ref(), &hex_key)
        .await
        .map_err(|err| JsonResponse::<ToggleOutcome>::build().internal_server_error(err))?
        .ok_or_else(|| {
            JsonResponse::<ToggleOutcome>::build().not_found("Lien d'accès invalide")
        })?;

    if user.view_only {
        return Err(JsonResponse::<ToggleOutcome>::build()
            .bad_request("Ce lien ne permet pas de réserver"));
    }

    db::gift::fetch(pg_pool.get_ref(), form.gift_id)
        .await
        .map_err(|err| JsonResponse::<ToggleOutcome>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<ToggleOutcome>::build().not_found("not found"))?;

    let interests = db::interest::fetch_by_gift(pg_pool.get_ref(), form.gift_id)
        .await
        .map_err(|err| JsonResponse::<ToggleOutcome>::build().internal_server_error(err))?;

    let outcome = match decide_toggle(&interests, user.id, form.confirm) {
        ToggleAction::Release => {
            db::interest::delete_own(pg_pool.get_ref(), form.gift_id, user.id)
                .await
                .map_err(|err| {
                    JsonResponse::<ToggleOutcome>::build().internal_server_error(err)
                })?;
            ToggleOutcome::Released
        }
        ToggleAction::RequireConfirmation(reserved_by) => {
            return Ok(JsonResponse::build()
                .set_item(ToggleOutcome::ConfirmationRequired { reserved_by })
                .ok("confirmation required"));
        }
        ToggleAction::Reserve => {
            db::interest::insert(pg_pool.get_ref(), form.gift_id, user.id)
                .await
                .map_err(|err| {
                    JsonResponse::<ToggleOutcome>::build().internal_server_error(err)
                })?;
            ToggleOutcome::Reserved
        }
    };

    Ok(JsonResponse::build().set_item(outcome).ok("success"))
}
