use crate::forms;
use crate::services::{ProductScraper, ScrapeError};
use actix_web::{post, web, HttpResponse};
use serde_json::json;

/// Pre-fills the gift form from a merchant product page. The response is the
/// flat record the backoffice UI expects; error messages are user-facing and
/// in French.
#[tracing::instrument(name = "Scrape product.", skip(form, scraper))]
#[post("/scrape-product")]
pub async fn product(
    form: web::Json<forms::ScrapeForm>,
    scraper: web::Data<ProductScraper>,
) -> HttpResponse {
    let Some(url) = form.url.as_deref().filter(|url| !url.is_empty()) else {
        return HttpResponse::BadRequest().json(json!({ "error": "URL manquante" }));
    };

    match scraper.scrape(url).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(err @ (ScrapeError::UnsupportedSite | ScrapeError::MissingTitle)) => {
            HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
        }
        Err(err) => {
            tracing::error!("Error scraping product: {:?}", err);
            HttpResponse::InternalServerError()
                .json(json!({ "error": "Erreur lors du scraping de la page" }))
        }
    }
}
