use actix_web::cookie::{time::Duration, Cookie};
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App, HttpResponse};
use listou::configuration::{BackofficeSettings, DatabaseSettings, Settings};
use listou::middleware::backoffice::{Gate, DASHBOARD_PATH, LOGIN_PATH};
use listou::routes;

fn test_settings() -> Settings {
    Settings {
        database: DatabaseSettings {
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5432,
            database_name: "listou".to_string(),
        },
        app_port: 8000,
        app_host: "127.0.0.1".to_string(),
        backoffice: BackofficeSettings {
            password: "sesame".to_string(),
            cookie_name: "backoffice-auth".to_string(),
            cookie_ttl_seconds: 60 * 60 * 24 * 7,
        },
    }
}

async fn dashboard() -> HttpResponse {
    HttpResponse::Ok().finish()
}

macro_rules! gated_app {
    ($settings:expr) => {
        test::init_service(
            App::new().service(
                web::scope("/backoffice")
                    .wrap(Gate::new($settings.backoffice.clone()))
                    .route("", web::get().to(dashboard))
                    .route("/gifts", web::get().to(dashboard)),
            ),
        )
        .await
    };
}

#[tokio::test]
async fn unauthenticated_requests_are_redirected_to_the_login_page() {
    let app = gated_app!(test_settings());

    let req = test::TestRequest::get().uri("/backoffice/gifts").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some(LOGIN_PATH)
    );
}

#[tokio::test]
async fn the_cookie_opens_the_gate() {
    let settings = test_settings();
    let app = gated_app!(settings);

    let req = test::TestRequest::get()
        .uri("/backoffice/gifts")
        .cookie(Cookie::new("backoffice-auth", "true"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn an_authenticated_visit_to_the_login_page_goes_back_to_the_dashboard() {
    let app = gated_app!(test_settings());

    let req = test::TestRequest::get()
        .uri("/backoffice/login")
        .cookie(Cookie::new("backoffice-auth", "true"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some(DASHBOARD_PATH)
    );
}

#[tokio::test]
async fn login_with_the_right_password_sets_the_week_long_cookie() {
    let settings = test_settings();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(settings))
            .service(web::scope("/api").service(routes::auth::login)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({ "password": "sesame" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "backoffice-auth")
        .expect("login response carries no gate cookie");
    assert_eq!(cookie.value(), "true");
    assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    assert_eq!(cookie.http_only(), Some(true));
}

#[tokio::test]
async fn login_with_a_wrong_password_is_rejected() {
    let settings = test_settings();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(settings))
            .service(web::scope("/api").service(routes::auth::login)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({ "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid password");
}
