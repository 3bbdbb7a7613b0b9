//! Product-page scraper: one orchestration, per-site extraction strategies.

mod amazon;
mod extract;
mod fnac;
mod price;

pub use price::parse_price;

use crate::models::ProductRecord;
use amazon::AmazonExtractor;
use extract::SiteExtractor;
use fnac::FnacExtractor;
use reqwest::header;
use scraper::Html;
use std::time::Duration;

// A desktop browser profile. Merchant pages served to unknown agents tend to
// be bot-block interstitials without any product markup.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "fr-FR,fr;q=0.9,en-US;q=0.8,en;q=0.7";

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 200;
pub const MAX_CATEGORIES: usize = 5;

#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    #[error("URL non supportée. Seuls Amazon et Fnac sont supportés.")]
    UnsupportedSite,
    #[error("Impossible de récupérer la page")]
    FetchFailed,
    #[error("Impossible d'extraire le titre du produit")]
    MissingTitle,
    #[error("Erreur lors du scraping de la page")]
    ScrapeFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Amazon,
    Fnac,
}

impl Site {
    pub fn detect(url: &str) -> Option<Site> {
        if url.contains("amazon.") {
            Some(Site::Amazon)
        } else if url.contains("fnac.com") || url.contains("fnac.fr") {
            Some(Site::Fnac)
        } else {
            None
        }
    }

    fn extractor(&self) -> &'static dyn SiteExtractor {
        match self {
            Site::Amazon => &AmazonExtractor,
            Site::Fnac => &FnacExtractor,
        }
    }
}

pub struct ProductScraper {
    http: reqwest::Client,
}

impl ProductScraper {
    pub fn try_new() -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;
        Ok(Self { http })
    }

    /// Fetches a product page and returns its normalized record. The site is
    /// detected from the URL; unknown merchants are rejected up front.
    #[tracing::instrument(name = "Scrape product page.", skip(self))]
    pub async fn scrape(&self, url: &str) -> Result<ProductRecord, ScrapeError> {
        let site = Site::detect(url).ok_or(ScrapeError::UnsupportedSite)?;
        self.scrape_with(site, url).await
    }

    /// Fetches `url` and extracts it with the strategy for `site`. Split out
    /// of `scrape` so the fetch path can be exercised against a local server.
    pub async fn scrape_with(&self, site: Site, url: &str) -> Result<ProductRecord, ScrapeError> {
        let response = self
            .http
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, ACCEPT)
            .header(header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch {}: {:?}", url, err);
                ScrapeError::FetchFailed
            })?;

        if !response.status().is_success() {
            tracing::warn!("Merchant returned {} for {}", response.status(), url);
            return Err(ScrapeError::FetchFailed);
        }

        let html = response.text().await.map_err(|err| {
            tracing::error!("Failed to read response body: {:?}", err);
            ScrapeError::ScrapeFailed
        })?;

        extract_record(site, &html)
    }
}

/// Pure extraction step: parse the HTML and run the site strategy over it.
/// A record without a title is useless to the caller, so that is the one
/// hard validation failure.
pub fn extract_record(site: Site, html: &str) -> Result<ProductRecord, ScrapeError> {
    let doc = Html::parse_document(html);
    let extractor = site.extractor();

    let title = extractor.title(&doc).ok_or(ScrapeError::MissingTitle)?;
    let description = extractor.description(&doc);

    Ok(ProductRecord {
        title: truncate(&title, MAX_TITLE_LEN),
        description: if description.is_empty() {
            "Produit".to_string()
        } else {
            truncate(&description, MAX_DESCRIPTION_LEN)
        },
        price: extractor.price(&doc).max(0.0),
        image_url: extractor.image(&doc),
        categories: extractor
            .categories(&doc)
            .into_iter()
            .take(MAX_CATEGORIES)
            .collect(),
        source: extractor.source().to_string(),
    })
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amazon_page(body: &str) -> String {
        format!("<html><head></head><body>{body}</body></html>")
    }

    #[test]
    fn detect_recognizes_both_merchants() {
        assert_eq!(Site::detect("https://www.amazon.fr/dp/B0ABC"), Some(Site::Amazon));
        assert_eq!(Site::detect("https://www.fnac.com/a123/jeu"), Some(Site::Fnac));
        assert_eq!(Site::detect("https://www.fnac.fr/a123"), Some(Site::Fnac));
        assert_eq!(Site::detect("https://example.com/product"), None);
    }

    #[test]
    fn missing_title_is_a_hard_failure() {
        let html = amazon_page("<div id=\"dp\">no title here</div>");
        let err = extract_record(Site::Amazon, &html).unwrap_err();
        assert!(matches!(err, ScrapeError::MissingTitle));
    }

    #[test]
    fn title_is_truncated_to_200_chars() {
        let long_title = "x".repeat(300);
        let html = amazon_page(&format!("<span id=\"productTitle\">{long_title}</span>"));
        let record = extract_record(Site::Amazon, &html).unwrap();
        assert_eq!(record.title.chars().count(), 200);
        assert!(record.price >= 0.0);
    }

    #[test]
    fn amazon_price_comes_from_offscreen_span() {
        let html = amazon_page(
            "<span id=\"productTitle\">Lego</span>\
             <span class=\"a-price\"><span class=\"a-offscreen\">1 234,56 €</span></span>",
        );
        let record = extract_record(Site::Amazon, &html).unwrap();
        assert_eq!(record.price, 1234.56);
    }

    #[test]
    fn amazon_image_is_rewritten_to_high_resolution() {
        let html = amazon_page(
            "<span id=\"productTitle\">Lego</span>\
             <img id=\"landingImage\" src=\"https://m.media/I/71x._AC_UL320_.jpg\"/>",
        );
        let record = extract_record(Site::Amazon, &html).unwrap();
        assert!(record.image_url.contains("_AC_SL1500_"));
        assert!(!record.image_url.contains("_AC_UL320_"));
    }

    #[test]
    fn description_prefers_first_three_bullets() {
        let html = amazon_page(
            "<span id=\"productTitle\">Lego</span>\
             <div id=\"feature-bullets\"><ul>\
             <li>Un</li><li>Deux</li><li>Trois</li><li>Quatre</li>\
             </ul></div>",
        );
        let record = extract_record(Site::Amazon, &html).unwrap();
        assert_eq!(record.description, "Un • Deux • Trois");
    }

    #[test]
    fn meta_description_fallback_is_truncated_to_200() {
        let long_meta = "d".repeat(250);
        let html = format!(
            "<html><head><meta name=\"description\" content=\"{long_meta}\"/></head>\
             <body><span id=\"productTitle\">Lego</span></body></html>"
        );
        let record = extract_record(Site::Amazon, &html).unwrap();
        assert_eq!(record.description.chars().count(), 200);
    }

    #[test]
    fn empty_description_defaults_to_produit() {
        let html = amazon_page("<span id=\"productTitle\">Lego</span>");
        let record = extract_record(Site::Amazon, &html).unwrap();
        assert_eq!(record.description, "Produit");
    }

    #[test]
    fn categories_are_capped_at_five() {
        let anchors: String = (1..=8)
            .map(|i| format!("<a href=\"/c{i}\">Cat {i}</a>"))
            .collect();
        let html = amazon_page(&format!(
            "<span id=\"productTitle\">Lego</span>\
             <div id=\"wayfinding-breadcrumbs_feature_div\">{anchors}</div>"
        ));
        let record = extract_record(Site::Amazon, &html).unwrap();
        assert_eq!(record.categories.len(), 5);
        assert_eq!(record.categories[0], "Cat 1");
    }

    #[test]
    fn fnac_excludes_home_breadcrumb_and_uses_og_title() {
        let html = "<html><head>\
             <meta property=\"og:title\" content=\"Console de jeu\"/>\
             <meta property=\"product:price:amount\" content=\"299,99\"/>\
             </head><body>\
             <a class=\"f-breadcrumb-link\">Accueil</a>\
             <a class=\"f-breadcrumb-link\">Jeux vidéo</a>\
             </body></html>";
        let record = extract_record(Site::Fnac, html).unwrap();
        assert_eq!(record.title, "Console de jeu");
        assert_eq!(record.price, 299.99);
        assert_eq!(record.categories, vec!["Jeux vidéo".to_string()]);
        assert_eq!(record.source, "Fnac");
    }

    #[test]
    fn fnac_image_dimension_token_is_upgraded() {
        let html = "<html><head><meta property=\"og:title\" content=\"Jeu\"/></head><body>\
             <div class=\"f-productVisuals-mainImage\">\
             <img src=\"https://static.fnac.com/multimedia/p_340x340/img.jpg\"/></div>\
             </body></html>";
        let record = extract_record(Site::Fnac, html).unwrap();
        assert!(record.image_url.contains("_2000x2000"));
    }
}
