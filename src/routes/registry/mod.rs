mod get;
mod toggle;

pub use get::*;
pub use toggle::*;
