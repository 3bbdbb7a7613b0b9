pub mod auth;
pub(crate) mod gift;
pub mod health_checks;
pub(crate) mod person;
pub(crate) mod person_gift;
pub(crate) mod registry;
pub mod scrape;
pub(crate) mod user;

pub use health_checks::*;
