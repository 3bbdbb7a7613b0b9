use crate::configuration::Settings;
use crate::middleware;
use crate::routes;
use crate::services::ProductScraper;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let backoffice_settings = settings.backoffice.clone();

    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let scraper = ProductScraper::try_new()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let scraper = web::Data::new(scraper);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/api")
                    .service(routes::auth::login)
                    .service(routes::scrape::product),
            )
            .service(
                web::scope("/gifts")
                    .service(routes::registry::page)
                    .service(routes::registry::toggle),
            )
            .service(
                web::scope("/backoffice")
                    .wrap(middleware::backoffice::Gate::new(backoffice_settings.clone()))
                    .service(
                        web::scope("/gifts")
                            .service(routes::gift::list)
                            .service(routes::gift::item)
                            .service(routes::gift::add)
                            .service(routes::gift::update)
                            .service(routes::gift::delete),
                    )
                    .service(
                        web::scope("/users")
                            .service(routes::user::list)
                            .service(routes::user::add)
                            .service(routes::user::delete),
                    )
                    .service(
                        web::scope("/persons")
                            .service(routes::person::list)
                            .service(routes::person::item)
                            .service(routes::person::add)
                            .service(routes::person::update)
                            .service(routes::person::delete),
                    )
                    .service(
                        web::scope("/person-gifts")
                            .service(routes::person_gift::add)
                            .service(routes::person_gift::update)
                            .service(routes::person_gift::update_status)
                            .service(routes::person_gift::delete),
                    ),
            )
            .app_data(json_config.clone())
            .app_data(pg_pool.clone())
            .app_data(scraper.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
