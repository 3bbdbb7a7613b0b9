use serde::Serialize;

/// Normalized product metadata extracted from a merchant page. Never
/// persisted as such; the backoffice copies it into a gift form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub categories: Vec<String>,
    pub source: String,
}
