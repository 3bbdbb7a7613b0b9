pub mod gift;
pub mod person;
pub mod registry;

pub use gift::{GiftWithInterest, InterestedUser, ReservationState, SortBy};
pub use person::{PersonDetail, PersonWithStats};
pub use registry::{RegistryPage, ToggleAction, ToggleOutcome};
