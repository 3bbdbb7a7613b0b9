use super::extract::{breadcrumbs, collect_texts, first_attr, first_text, SiteExtractor};
use super::price::parse_price;
use super::truncate;
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

const TITLE_RULES: &[&str] = &[
    "h1.f-productHeader-Title",
    ".f-productHeader-Title",
    "h1[itemprop=\"name\"]",
];

const TITLE_META: &[(&str, &str)] = &[("meta[property=\"og:title\"]", "content")];

const PRICE_RULES: &[&str] = &[".f-priceBox-price", ".price"];

const PRICE_META: &[(&str, &str)] = &[
    ("[itemprop=\"price\"]", "content"),
    ("meta[property=\"product:price:amount\"]", "content"),
];

const IMAGE_RULES: &[(&str, &str)] = &[
    (".f-productVisuals-mainImage img", "src"),
    ("[itemprop=\"image\"]", "src"),
    (".js-ProductVisuals-image", "src"),
    ("meta[property=\"og:image\"]", "content"),
];

const FEATURE_ITEMS: &str = ".f-productDescription-list li, .ProductDescription-list li";
const BREADCRUMBS: &str = ".f-breadcrumb-link, .breadcrumb a";

// Fnac visuals embed their dimensions, e.g. _340x340; request the large one
static DIMENSION_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_\d+x\d+").unwrap());

pub struct FnacExtractor;

impl SiteExtractor for FnacExtractor {
    fn source(&self) -> &'static str {
        "Fnac"
    }

    fn title(&self, doc: &Html) -> Option<String> {
        first_text(doc, TITLE_RULES).or_else(|| first_attr(doc, TITLE_META))
    }

    fn price(&self, doc: &Html) -> f64 {
        first_text(doc, &PRICE_RULES[..1])
            .or_else(|| first_attr(doc, &PRICE_META[..1]))
            .or_else(|| first_text(doc, &PRICE_RULES[1..]))
            .or_else(|| first_attr(doc, &PRICE_META[1..]))
            .map(|text| parse_price(&text))
            .unwrap_or(0.0)
    }

    fn image(&self, doc: &Html) -> String {
        let url = first_attr(doc, IMAGE_RULES).unwrap_or_default();
        if url.contains('_') {
            DIMENSION_TOKEN.replace(&url, "_2000x2000").into_owned()
        } else {
            url
        }
    }

    fn description(&self, doc: &Html) -> String {
        let items = collect_texts(doc, FEATURE_ITEMS, 3);
        if !items.is_empty() {
            return items.join(" • ");
        }

        first_text(doc, &[".f-productDescription-text", "[itemprop=\"description\"]"])
            .or_else(|| first_attr(doc, &[("meta[name=\"description\"]", "content")]))
            .map(|content| truncate(&content, 200))
            .unwrap_or_default()
    }

    fn categories(&self, doc: &Html) -> Vec<String> {
        // "Accueil" is the home breadcrumb, not a category
        breadcrumbs(doc, BREADCRUMBS, Some("Accueil"))
    }
}
