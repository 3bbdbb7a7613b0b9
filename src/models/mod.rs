mod gift;
mod interest;
mod person;
mod person_gift;
mod product;
mod user;

pub use gift::*;
pub use interest::*;
pub use person::*;
pub use person_gift::*;
pub use product::*;
pub use user::*;
