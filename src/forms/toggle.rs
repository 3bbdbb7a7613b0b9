use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reservation toggle. `confirm` acknowledges a co-reservation after the
/// conflict dialog; it is ignored when the gift is free or already ours.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleForm {
    pub gift_id: Uuid,
    #[serde(default)]
    pub confirm: bool,
}
