//! Google Play scraping: HTTP client, parsing, data models and the scraper handle.

pub mod client;
pub mod engine;
pub mod models;
pub mod options;
pub mod parser;
pub mod selectors;

pub use client::{PlayClient, PlayFetch};
pub use engine::Scraper;
pub use models::{App, Price, SearchResults};
pub use options::Options;
pub use parser::Parser;
