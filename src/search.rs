//! Search query construction for the Google Play store.
//!
//! Builds the store search URL for a free-text query and a price filter and
//! hands it to a [`Scraper`]. Construction is synchronous and does no I/O;
//! the returned scraper is inert until it is run.

use crate::error::{Error, Result};
use crate::play::{Options, Scraper};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use url::Url;

/// Google Play store search endpoint.
pub const SEARCH_URL: &str = "https://play.google.com/store/search";

/// Listing category sent with every search.
const CATEGORY_APPS: &str = "apps";

/// Price filter for search results.
///
/// The discriminants are sent as-is in the `price` parameter and must not be
/// reordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PriceQuery {
    /// Free and paid apps
    #[default]
    All = 0,
    /// Free apps only
    Free = 1,
    /// Paid apps only
    Paid = 2,
}

impl PriceQuery {
    /// Returns the wire ordinal for this filter.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns all price filters in wire order.
    pub fn all() -> &'static [PriceQuery] {
        &[PriceQuery::All, PriceQuery::Free, PriceQuery::Paid]
    }
}

impl TryFrom<u8> for PriceQuery {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(PriceQuery::All),
            1 => Ok(PriceQuery::Free),
            2 => Ok(PriceQuery::Paid),
            other => Err(Error::InvalidPrice(other.to_string())),
        }
    }
}

impl FromStr for PriceQuery {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "any" | "0" => Ok(PriceQuery::All),
            "free" | "1" => Ok(PriceQuery::Free),
            "paid" | "2" => Ok(PriceQuery::Paid),
            _ => Err(Error::InvalidPrice(s.to_string())),
        }
    }
}

impl fmt::Display for PriceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceQuery::All => write!(f, "all"),
            PriceQuery::Free => write!(f, "free"),
            PriceQuery::Paid => write!(f, "paid"),
        }
    }
}

/// Builds the search URL for `query` filtered by `price`.
pub fn search_url(query: &str, price: PriceQuery) -> Result<Url> {
    build_url(SEARCH_URL, query, price)
}

/// Creates a scraper for a store search.
///
/// Fails only when the search endpoint cannot be parsed. `options` is handed
/// to the scraper untouched.
pub fn new_query(query: &str, price: PriceQuery, options: Options) -> Result<Scraper> {
    let url = search_url(query, price)?;
    debug!("Search URL: {}", url);

    Ok(Scraper::new(url, options))
}

fn build_url(base: &str, query: &str, price: PriceQuery) -> Result<Url> {
    let mut url = Url::parse(base)?;

    // Encoded sorted by key, like a canonical form encoder.
    let mut params = BTreeMap::new();
    params.insert("q", query.to_string());
    params.insert("c", CATEGORY_APPS.to_string());
    params.insert("price", price.ordinal().to_string());

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &params {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}
