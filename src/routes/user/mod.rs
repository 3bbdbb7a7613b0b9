mod add;
mod delete;
mod get;

pub use add::*;
pub use delete::*;
pub use get::*;
