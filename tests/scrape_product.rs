use listou::services::{ProductScraper, ScrapeError, Site};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AMAZON_FIXTURE: &str = include_str!("fixtures/amazon_product.html");

async fn serve_page(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dp/B0TEST"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn scraping_an_amazon_page_yields_the_full_record() {
    let server = serve_page(200, AMAZON_FIXTURE).await;
    let scraper = ProductScraper::try_new().expect("Failed to build scraper");

    let record = scraper
        .scrape_with(Site::Amazon, &format!("{}/dp/B0TEST", server.uri()))
        .await
        .expect("Failed to scrape fixture page");

    assert_eq!(
        record.title,
        "LEGO Technic 42151 Le Bolide Bugatti, Maquette de Voiture de Course à Construire"
    );
    assert_eq!(record.price, 49.99);
    assert_eq!(
        record.image_url,
        "https://m.media-amazon.com/images/I/81a2b3c4d5L._AC_SL1500_.jpg"
    );
    assert_eq!(
        record.description,
        "Maquette de voiture de course Bugatti à construire • \
         905 pièces, pour les enfants dès 9 ans • \
         Capot amovible et moteur W16 reproduit"
    );
    assert_eq!(
        record.categories,
        vec!["Jeux et Jouets", "Jeux de construction", "LEGO"]
    );
    assert_eq!(record.source, "Amazon");
}

#[tokio::test]
async fn a_merchant_error_page_maps_to_fetch_failed() {
    let server = serve_page(503, "Service Unavailable").await;
    let scraper = ProductScraper::try_new().expect("Failed to build scraper");

    let err = scraper
        .scrape_with(Site::Amazon, &format!("{}/dp/B0TEST", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapeError::FetchFailed));
}

#[tokio::test]
async fn unknown_merchants_are_rejected_before_any_request() {
    let scraper = ProductScraper::try_new().expect("Failed to build scraper");

    let err = scraper
        .scrape("https://www.example.com/product/1")
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapeError::UnsupportedSite));
}
