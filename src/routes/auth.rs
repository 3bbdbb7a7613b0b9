use crate::configuration::Settings;
use crate::forms;
use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{post, web, HttpResponse};
use serde_json::json;

/// Shared-secret login. On success the gate cookie is set for 7 days; the
/// wire shape (`{"success": true}` / `{"error": ...}`) is fixed for the
/// backoffice UI.
#[tracing::instrument(name = "Backoffice login.", skip(form, settings))]
#[post("/auth/login")]
pub async fn login(
    form: web::Json<forms::LoginForm>,
    settings: web::Data<Settings>,
) -> HttpResponse {
    if form.password != settings.backoffice.password {
        tracing::warn!("Rejected backoffice login attempt");
        return HttpResponse::Unauthorized().json(json!({ "error": "Invalid password" }));
    }

    let cookie = Cookie::build(settings.backoffice.cookie_name.clone(), "true")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(settings.backoffice.cookie_ttl_seconds as i64))
        .finish();

    HttpResponse::Ok()
        .cookie(cookie)
        .json(json!({ "success": true }))
}
