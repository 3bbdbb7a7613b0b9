use crate::models;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCounts {
    pub idee: u32,
    pub commande: u32,
    pub livre: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonWithStats {
    #[serde(flatten)]
    pub person: models::Person,
    pub total_spent: f64,
    pub remaining_budget: f64,
    pub gift_counts: GiftCounts,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetail {
    #[serde(flatten)]
    pub stats: PersonWithStats,
    pub gifts: Vec<models::PersonGift>,
}

/// Budget stats for one person over their tracked gifts. Only the gifts
/// belonging to that person may be passed in.
pub fn with_stats(person: models::Person, gifts: &[models::PersonGift]) -> PersonWithStats {
    let total_spent: f64 = gifts.iter().map(|gift| gift.amount).sum();
    let mut counts = GiftCounts::default();
    for gift in gifts {
        match gift.status.as_str() {
            models::STATUS_ORDERED => counts.commande += 1,
            models::STATUS_DELIVERED => counts.livre += 1,
            _ => counts.idee += 1,
        }
    }

    PersonWithStats {
        remaining_budget: person.budget - total_spent,
        person,
        total_spent,
        gift_counts: counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn person(budget: f64) -> models::Person {
        models::Person {
            id: Uuid::new_v4(),
            name: "Maman".to_string(),
            budget,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn tracked_gift(person_id: Uuid, amount: f64, status: &str) -> models::PersonGift {
        models::PersonGift {
            id: Uuid::new_v4(),
            person_id,
            name: "Cadeau".to_string(),
            amount,
            status: status.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn stats_sum_amounts_and_count_statuses() {
        let p = person(100.0);
        let gifts = vec![
            tracked_gift(p.id, 20.0, models::STATUS_IDEA),
            tracked_gift(p.id, 30.0, models::STATUS_ORDERED),
            tracked_gift(p.id, 25.5, models::STATUS_DELIVERED),
        ];

        let stats = with_stats(p, &gifts);
        assert_eq!(stats.total_spent, 75.5);
        assert_eq!(stats.remaining_budget, 24.5);
        assert_eq!(stats.gift_counts.idee, 1);
        assert_eq!(stats.gift_counts.commande, 1);
        assert_eq!(stats.gift_counts.livre, 1);
    }

    #[test]
    fn overspending_goes_negative_without_clamping() {
        let p = person(10.0);
        let gifts = vec![tracked_gift(p.id, 40.0, models::STATUS_ORDERED)];
        let stats = with_stats(p, &gifts);
        assert_eq!(stats.remaining_budget, -30.0);
    }
}
