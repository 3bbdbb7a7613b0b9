use crate::models;
use crate::views::gift::{SortBy, ALL_CATEGORIES};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GiftForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub title: String,
    #[validate(max_length = 1000)]
    #[serde(default)]
    pub description: String,
    #[validate(min_length = 1)]
    pub purchase_link: String,
    pub image_url: Option<String>,
    #[validate(minimum = 0.0)]
    pub price: f64,
    #[validate(max_items = 5)]
    #[serde(default)]
    pub categories: Vec<String>,
}

impl From<&GiftForm> for models::Gift {
    fn from(form: &GiftForm) -> Self {
        let mut gift = models::Gift::default();
        gift.id = Uuid::new_v4();
        gift.title = form.title.trim().to_string();
        gift.description = form.description.trim().to_string();
        gift.purchase_link = form.purchase_link.trim().to_string();
        gift.image_url = form.image_url.clone();
        gift.price = form.price;
        gift.categories = form.categories.clone();
        gift.created_at = Utc::now();
        gift.updated_at = Utc::now();

        gift
    }
}

/// Query string of the public gift list: `?category=Livres&sort=price-asc`.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct GiftListQuery {
    #[serde(default = "all_categories")]
    pub category: String,
    #[serde(default)]
    pub sort: SortBy,
}

fn all_categories() -> String {
    ALL_CATEGORIES.to_string()
}
