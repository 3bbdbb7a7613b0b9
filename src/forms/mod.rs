mod gift;
mod login;
mod person;
mod person_gift;
mod scrape;
mod toggle;
mod user;

pub use gift::*;
pub use login::*;
pub use person::*;
pub use person_gift::*;
pub use scrape::*;
pub use toggle::*;
pub use user::*;
