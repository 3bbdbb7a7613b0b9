pub mod scrape;

pub use scrape::{ProductScraper, ScrapeError, Site};
