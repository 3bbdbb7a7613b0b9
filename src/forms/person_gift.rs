use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonGiftForm {
    pub person_id: Uuid,
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub name: String,
    #[validate(minimum = 0.0)]
    pub amount: f64,
    #[validate(enumerate("Idée", "Commandé", "Livré"))]
    #[serde(default = "default_status")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StatusForm {
    #[validate(enumerate("Idée", "Commandé", "Livré"))]
    pub status: String,
}

fn default_status() -> String {
    "Idée".to_string()
}
