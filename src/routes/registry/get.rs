use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::views::gift::{distinct_categories, filter_and_sort, project};
use crate::views::registry::RegistryPage;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

/// The public per-user page. The hex key in the path is the only credential;
/// an unknown key yields a 404 so the URL space stays unguessable.
#[tracing::instrument(name = "Get registry page.", skip(pg_pool))]
#[get("/{hex_key}")]
pub async fn page(
    path: web::Path<String>,
    query: web::Query<forms::GiftListQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let hex_key = path.into_inner();
    let user = db::user::fetch_by_hex_key(pg_pool.get_ref(), &hex_key)
        .await
        .map_err(|err| JsonResponse::<RegistryPage>::build().internal_server_error(err))?
        .ok_or_else(|| JsonResponse::<RegistryPage>::build().not_found("Lien d'accès invalide"))?;

    let gifts = db::gift::fetch_all(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<RegistryPage>::build().internal_server_error(err))?;
    let interests = db::interest::fetch_all_with_users(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<RegistryPage>::build().internal_server_error(err))?;

    let projected = project(gifts, &interests, user.id);
    // categories cover the whole registry, not just the filtered slice
    let categories = distinct_categories(&projected);
    let gifts = filter_and_sort(projected, &query.category, query.sort);

    let page = RegistryPage {
        user,
        categories,
        gifts,
    };

    Ok(JsonResponse::build().set_item(page).ok("OK"))
}
