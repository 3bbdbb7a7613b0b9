use scraper::{Html, Selector};

/// One extractor per merchant. Every implementation answers the same five
/// questions against a parsed page; the orchestration in `scrape` never
/// needs to know which site it is talking to.
pub trait SiteExtractor {
    fn source(&self) -> &'static str;
    fn title(&self, doc: &Html) -> Option<String>;
    fn price(&self, doc: &Html) -> f64;
    fn image(&self, doc: &Html) -> String;
    fn description(&self, doc: &Html) -> String;
    fn categories(&self, doc: &Html) -> Vec<String>;
}

/// Walks an ordered fallback chain of selectors and returns the first
/// non-empty text. Product pages vary their markup across template versions
/// and AB tests, so no single selector is reliable.
pub(crate) fn first_text(doc: &Html, selectors: &[&str]) -> Option<String> {
    for raw in selectors {
        let Ok(selector) = Selector::parse(raw) else {
            continue;
        };
        if let Some(element) = doc.select(&selector).next() {
            let text = element.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Same fallback walk, but over `(selector, attribute)` pairs so that
/// `img[src]` and `meta[content]` rules can share one chain.
pub(crate) fn first_attr(doc: &Html, rules: &[(&str, &str)]) -> Option<String> {
    for (raw, attr) in rules {
        let Ok(selector) = Selector::parse(raw) else {
            continue;
        };
        if let Some(value) = doc
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr(attr))
        {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Collects up to `limit` non-empty texts matching a selector list.
pub(crate) fn collect_texts(doc: &Html, raw: &str, limit: usize) -> Vec<String> {
    let Ok(selector) = Selector::parse(raw) else {
        return Vec::new();
    };
    doc.select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .take(limit)
        .collect()
}

/// Breadcrumb anchors filtered down to plausible category names. The home
/// breadcrumb label and overlong entries are dropped.
pub(crate) fn breadcrumbs(doc: &Html, raw: &str, excluded: Option<&str>) -> Vec<String> {
    let Ok(selector) = Selector::parse(raw) else {
        return Vec::new();
    };
    doc.select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|category| {
            let length = category.chars().count();
            (1..50).contains(&length) && Some(category.as_str()) != excluded
        })
        .collect()
}
