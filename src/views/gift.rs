//! Derived reservation view over gifts and interests.
//!
//! Nothing here is persisted: a gift's reservation status is recomputed on
//! every load from the interest rows, so there is no stored flag that could
//! drift out of sync.

use crate::models;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use uuid::Uuid;

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestedUser {
    pub user_id: Uuid,
    pub user_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftWithInterest {
    #[serde(flatten)]
    pub gift: models::Gift,
    pub interested_users: Vec<InterestedUser>,
    pub current_user_interested: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationState {
    Unreserved,
    ReservedByMe,
    ReservedByOthers,
}

impl GiftWithInterest {
    pub fn reservation_state(&self) -> ReservationState {
        if self.current_user_interested {
            ReservationState::ReservedByMe
        } else if !self.interested_users.is_empty() {
            ReservationState::ReservedByOthers
        } else {
            ReservationState::Unreserved
        }
    }

    fn reserved_by_others_only(&self) -> bool {
        !self.current_user_interested && !self.interested_users.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SortBy {
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "category")]
    Category,
}

/// Joins gifts with their interest rows for one viewer. Gift order is
/// preserved (the load step orders by descending creation time).
pub fn project(
    gifts: Vec<models::Gift>,
    interests: &[models::InterestWithUser],
    viewer_id: Uuid,
) -> Vec<GiftWithInterest> {
    gifts
        .into_iter()
        .map(|gift| {
            let interested_users: Vec<InterestedUser> = interests
                .iter()
                .filter(|interest| interest.gift_id == gift.id)
                .map(|interest| InterestedUser {
                    user_id: interest.user_id,
                    user_name: interest.user_name.clone(),
                })
                .collect();
            let current_user_interested = interested_users
                .iter()
                .any(|interest| interest.user_id == viewer_id);

            GiftWithInterest {
                gift,
                interested_users,
                current_user_interested,
            }
        })
        .collect()
}

/// Category filter plus the composite three-tier ordering: the viewer's own
/// reservations first, gifts reserved by someone else last, remaining ties
/// broken by the selected sort mode. The sort is stable, so `Default`
/// preserves the incoming order.
pub fn filter_and_sort(
    gifts: Vec<GiftWithInterest>,
    category: &str,
    sort: SortBy,
) -> Vec<GiftWithInterest> {
    let mut filtered: Vec<GiftWithInterest> = if category == ALL_CATEGORIES {
        gifts
    } else {
        gifts
            .into_iter()
            .filter(|entry| entry.gift.categories.iter().any(|c| c == category))
            .collect()
    };

    filtered.sort_by(|a, b| compare(a, b, sort));
    filtered
}

fn compare(a: &GiftWithInterest, b: &GiftWithInterest, sort: SortBy) -> Ordering {
    match (a.current_user_interested, b.current_user_interested) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    match (a.reserved_by_others_only(), b.reserved_by_others_only()) {
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        _ => {}
    }

    match sort {
        SortBy::Default => Ordering::Equal,
        SortBy::PriceAsc => a
            .gift
            .price
            .partial_cmp(&b.gift.price)
            .unwrap_or(Ordering::Equal),
        SortBy::PriceDesc => b
            .gift
            .price
            .partial_cmp(&a.gift.price)
            .unwrap_or(Ordering::Equal),
        SortBy::Category => {
            let a_cat = a.gift.categories.first().map(String::as_str).unwrap_or("");
            let b_cat = b.gift.categories.first().map(String::as_str).unwrap_or("");
            a_cat.cmp(b_cat)
        }
    }
}

/// Distinct category names across all gifts, sorted, for the filter bar.
pub fn distinct_categories(gifts: &[GiftWithInterest]) -> Vec<String> {
    gifts
        .iter()
        .flat_map(|entry| entry.gift.categories.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn gift(title: &str, price: f64, categories: &[&str]) -> models::Gift {
        models::Gift {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            purchase_link: "https://example.com".to_string(),
            image_url: None,
            price,
            categories: categories.iter().map(|c| c.to_string()).collect(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn interest(gift: &models::Gift, user_id: Uuid, name: &str) -> models::InterestWithUser {
        models::InterestWithUser {
            id: Uuid::new_v4(),
            gift_id: gift.id,
            user_id,
            user_name: name.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn projection_derives_the_display_state_per_viewer() {
        let user_a = Uuid::new_v4();
        let user_b = Uuid::new_v4();
        let user_c = Uuid::new_v4();

        let g = gift("Vélo", 150.0, &[]);
        let interests = vec![interest(&g, user_a, "Alice"), interest(&g, user_b, "Bruno")];

        let as_a = project(vec![g.clone()], &interests, user_a);
        assert_eq!(as_a[0].reservation_state(), ReservationState::ReservedByMe);
        assert!(as_a[0].current_user_interested);

        let as_c = project(vec![g.clone()], &interests, user_c);
        assert_eq!(as_c[0].reservation_state(), ReservationState::ReservedByOthers);
        assert_eq!(as_c[0].interested_users.len(), 2);

        let unclaimed = project(vec![gift("Livre", 10.0, &[])], &interests, user_c);
        assert_eq!(unclaimed[0].reservation_state(), ReservationState::Unreserved);
    }

    #[test]
    fn viewer_reservations_first_then_free_then_taken() {
        let viewer = Uuid::new_v4();
        let other = Uuid::new_v4();

        let mine = gift("Mine", 30.0, &[]);
        let free = gift("Free", 10.0, &[]);
        let taken = gift("Taken", 20.0, &[]);
        let interests = vec![
            interest(&mine, viewer, "Carole"),
            interest(&taken, other, "Alice"),
        ];

        let projected = project(vec![taken, free, mine], &interests, viewer);
        let sorted = filter_and_sort(projected, ALL_CATEGORIES, SortBy::Default);

        let titles: Vec<&str> = sorted.iter().map(|e| e.gift.title.as_str()).collect();
        assert_eq!(titles, vec!["Mine", "Free", "Taken"]);
    }

    #[test]
    fn price_sort_applies_within_tiers_only() {
        let viewer = Uuid::new_v4();
        let other = Uuid::new_v4();

        let cheap_taken = gift("CheapTaken", 1.0, &[]);
        let expensive_free = gift("ExpensiveFree", 100.0, &[]);
        let cheap_free = gift("CheapFree", 5.0, &[]);
        let interests = vec![interest(&cheap_taken, other, "Alice")];

        let projected = project(
            vec![cheap_taken, expensive_free, cheap_free],
            &interests,
            viewer,
        );
        let sorted = filter_and_sort(projected, ALL_CATEGORIES, SortBy::PriceAsc);

        let titles: Vec<&str> = sorted.iter().map(|e| e.gift.title.as_str()).collect();
        // the cheapest gift of all is reserved by someone else, so it stays last
        assert_eq!(titles, vec!["CheapFree", "ExpensiveFree", "CheapTaken"]);
    }

    #[test]
    fn descending_price_and_category_tiebreaks() {
        let viewer = Uuid::new_v4();

        let projected = project(
            vec![
                gift("B", 10.0, &["Jouets"]),
                gift("A", 50.0, &["Livres"]),
            ],
            &[],
            viewer,
        );

        let by_price = filter_and_sort(projected.clone(), ALL_CATEGORIES, SortBy::PriceDesc);
        assert_eq!(by_price[0].gift.title, "A");

        let by_category = filter_and_sort(projected, ALL_CATEGORIES, SortBy::Category);
        assert_eq!(by_category[0].gift.title, "B");
    }

    #[test]
    fn category_filter_honors_the_all_sentinel() {
        let viewer = Uuid::new_v4();
        let projected = project(
            vec![
                gift("Console", 300.0, &["Jeux vidéo", "High-tech"]),
                gift("Roman", 15.0, &["Livres"]),
            ],
            &[],
            viewer,
        );

        let all = filter_and_sort(projected.clone(), ALL_CATEGORIES, SortBy::Default);
        assert_eq!(all.len(), 2);

        let books = filter_and_sort(projected, "Livres", SortBy::Default);
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].gift.title, "Roman");
    }

    #[test]
    fn distinct_categories_are_sorted_and_deduplicated() {
        let viewer = Uuid::new_v4();
        let projected = project(
            vec![
                gift("A", 1.0, &["Livres", "Jouets"]),
                gift("B", 2.0, &["Jouets"]),
            ],
            &[],
            viewer,
        );

        assert_eq!(
            distinct_categories(&projected),
            vec!["Jouets".to_string(), "Livres".to_string()]
        );
    }
}
