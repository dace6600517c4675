//! play-scraper - Fast, stateless Google Play search CLI
//!
//! Builds store search queries and scrapes the result pages with TLS
//! fingerprint emulation.

pub mod commands;
pub mod config;
pub mod error;
pub mod filters;
pub mod format;
pub mod play;
pub mod search;

pub use config::Config;
pub use error::Error;
pub use play::{App, Options, Price, Scraper};
pub use search::{new_query, search_url, PriceQuery};
