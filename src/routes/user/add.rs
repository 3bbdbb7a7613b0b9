use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use chrono::Utc;
use rand::Rng;
use serde_valid::Validate;
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Add user.", skip(form, pg_pool))]
#[post("")]
pub async fn add(
    form: web::Json<forms::UserForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|errors| JsonResponse::<models::User>::build().form_error(errors.to_string()))?;

    let user = models::User {
        id: Uuid::new_v4(),
        name: form.name.trim().to_string(),
        hex_key: generate_hex_key(),
        view_only: form.view_only,
        created_at: Utc::now(),
    };

    db::user::insert(pg_pool.get_ref(), user)
        .await
        .map(|user| JsonResponse::build().set_item(user).ok("success"))
        .map_err(|err| JsonResponse::<models::User>::build().internal_server_error(err))
}

/// 16 hex chars, the user's share link token.
fn generate_hex_key() -> String {
    format!("{:016x}", rand::thread_rng().gen::<u64>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_key_is_sixteen_lowercase_hex_chars() {
        let key = generate_hex_key();
        assert_eq!(key.len(), 16);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
