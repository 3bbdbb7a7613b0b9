use super::gift::GiftWithInterest;
use crate::models;
use serde::Serialize;
use uuid::Uuid;

/// Everything the public per-user page needs in one load: the viewer, the
/// filter bar categories and the projected gift list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryPage {
    pub user: models::User,
    pub categories: Vec<String>,
    pub gifts: Vec<GiftWithInterest>,
}

/// Result of a toggle attempt. `ConfirmationRequired` means nothing was
/// committed: the gift is already claimed by the listed users and the viewer
/// has to confirm the co-reservation explicitly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToggleOutcome {
    Reserved,
    Released,
    ConfirmationRequired {
        #[serde(rename = "reservedBy")]
        reserved_by: Vec<String>,
    },
}

/// What a toggle request should do to the interest rows.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleAction {
    /// Delete the viewer's own row; other claims stay untouched.
    Release,
    /// Insert a row for the viewer, alongside any existing ones.
    Reserve,
    /// Commit nothing; report who already holds the gift.
    RequireConfirmation(Vec<String>),
}

/// Decides the toggle transition from the gift's current interest rows. A
/// viewer who already holds the gift always releases; a gift claimed by
/// someone else needs the `confirm` flag before the co-reservation is
/// committed; a free gift is reserved outright.
pub fn decide_toggle(
    interests: &[models::InterestWithUser],
    viewer_id: Uuid,
    confirm: bool,
) -> ToggleAction {
    let mine = interests.iter().any(|interest| interest.user_id == viewer_id);
    if mine {
        return ToggleAction::Release;
    }

    if !interests.is_empty() && !confirm {
        let reserved_by = interests
            .iter()
            .map(|interest| interest.user_name.clone())
            .collect();
        return ToggleAction::RequireConfirmation(reserved_by);
    }

    ToggleAction::Reserve
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn interest(gift_id: Uuid, user_id: Uuid, name: &str) -> models::InterestWithUser {
        models::InterestWithUser {
            id: Uuid::new_v4(),
            gift_id,
            user_id,
            user_name: name.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn a_free_gift_is_reserved_without_confirmation() {
        let viewer = Uuid::new_v4();
        assert_eq!(decide_toggle(&[], viewer, false), ToggleAction::Reserve);
    }

    #[test]
    fn a_claimed_gift_is_not_committed_until_the_viewer_confirms() {
        let gift_id = Uuid::new_v4();
        let viewer = Uuid::new_v4();
        let interests = vec![
            interest(gift_id, Uuid::new_v4(), "Alice"),
            interest(gift_id, Uuid::new_v4(), "Bruno"),
        ];

        assert_eq!(
            decide_toggle(&interests, viewer, false),
            ToggleAction::RequireConfirmation(vec!["Alice".to_string(), "Bruno".to_string()])
        );
        // resending with confirm records the co-reservation alongside the others
        assert_eq!(decide_toggle(&interests, viewer, true), ToggleAction::Reserve);
    }

    #[test]
    fn a_viewer_holding_the_gift_releases_their_own_claim_only() {
        let gift_id = Uuid::new_v4();
        let viewer = Uuid::new_v4();
        let interests = vec![
            interest(gift_id, viewer, "Carole"),
            interest(gift_id, Uuid::new_v4(), "Alice"),
        ];

        // release is unconditional, the confirm flag is ignored
        assert_eq!(decide_toggle(&interests, viewer, false), ToggleAction::Release);
        assert_eq!(decide_toggle(&interests, viewer, true), ToggleAction::Release);
    }
}
