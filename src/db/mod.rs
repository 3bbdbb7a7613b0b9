pub mod gift;
pub mod interest;
pub mod person;
pub mod person_gift;
pub mod user;
