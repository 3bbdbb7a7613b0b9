use super::extract::{breadcrumbs, collect_texts, first_attr, first_text, SiteExtractor};
use super::price::parse_price;
use super::truncate;
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

const TITLE_RULES: &[&str] = &["#productTitle", "h1.product-title", "span#productTitle"];

const PRICE_RULES: &[&str] = &[
    ".a-price .a-offscreen",
    "#priceblock_ourprice",
    "#priceblock_dealprice",
    ".a-price-whole",
];

const IMAGE_RULES: &[(&str, &str)] = &[
    ("#landingImage", "src"),
    ("#imgBlkFront", "src"),
    ("#main-image", "src"),
    (".a-dynamic-image", "src"),
];

const FEATURE_BULLETS: &str = "#feature-bullets-btf ul li, #feature-bullets ul li";
const BREADCRUMBS: &str = "#wayfinding-breadcrumbs_feature_div a, .a-breadcrumb a";

// thumbnails carry a size token like _AC_UL320_; swap it for the large one
static LOW_RES_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_AC_.*?_").unwrap());

pub struct AmazonExtractor;

impl SiteExtractor for AmazonExtractor {
    fn source(&self) -> &'static str {
        "Amazon"
    }

    fn title(&self, doc: &Html) -> Option<String> {
        first_text(doc, TITLE_RULES)
    }

    fn price(&self, doc: &Html) -> f64 {
        first_text(doc, PRICE_RULES)
            .map(|text| parse_price(&text))
            .unwrap_or(0.0)
    }

    fn image(&self, doc: &Html) -> String {
        let url = first_attr(doc, IMAGE_RULES).unwrap_or_default();
        if url.contains("_AC_") {
            LOW_RES_TOKEN.replace(&url, "_AC_SL1500_").into_owned()
        } else {
            url
        }
    }

    fn description(&self, doc: &Html) -> String {
        let bullets = collect_texts(doc, FEATURE_BULLETS, 3);
        if !bullets.is_empty() {
            return bullets.join(" • ");
        }

        if let Some(paragraph) = first_text(doc, &["#productDescription p"]) {
            return truncate(&paragraph, 200);
        }

        first_attr(doc, &[("meta[name=\"description\"]", "content")])
            .map(|content| truncate(&content, 200))
            .unwrap_or_default()
    }

    fn categories(&self, doc: &Html) -> Vec<String> {
        breadcrumbs(doc, BREADCRUMBS, None)
    }
}
