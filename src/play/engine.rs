//! Scraper handle: a target URL plus options, run on demand.

use crate::filters::FilterChainBuilder;
use crate::play::client::PlayFetch;
use crate::play::models::SearchResults;
use crate::play::options::Options;
use crate::play::parser::{Parser, PLAY_ORIGIN};
use anyhow::{Context, Result};
use tracing::{debug, info};
use url::Url;

/// A ready-to-run scraper for one store page.
///
/// Creating a scraper performs no I/O. Nothing is fetched until [`Scraper::run`].
#[derive(Debug, Clone)]
pub struct Scraper {
    url: String,
    options: Options,
}

impl Scraper {
    /// Creates a scraper for an absolute page URL.
    pub fn new(url: impl Into<String>, options: Options) -> Self {
        Self { url: url.into(), options }
    }

    /// Returns the page URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the URL actually requested: the page URL with `hl` and `gl` set.
    pub fn request_url(&self) -> Result<String> {
        let mut url = Url::parse(&self.url)
            .with_context(|| format!("Invalid scraper URL: {}", self.url))?;

        let existing: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| k != "hl" && k != "gl")
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (key, value) in &existing {
                pairs.append_pair(key, value);
            }
            if !self.options.language.is_empty() {
                pairs.append_pair("hl", &self.options.language);
            }
            if !self.options.country.is_empty() {
                pairs.append_pair("gl", &self.options.country);
            }
        }

        Ok(url.to_string())
    }

    /// Fetches and parses the page, then applies the option filters and limit.
    pub async fn run(&self, client: &impl PlayFetch) -> Result<SearchResults> {
        let request_url = self.request_url()?;

        let html = client.fetch(&request_url).await?;
        let mut results = Parser::new(self.link_base()).parse_search(&html, &request_url)?;

        let filters = FilterChainBuilder::from_options(&self.options).build();
        if !filters.is_empty() {
            debug!("Active filters: {}", filters.descriptions().join(", "));
        }

        let parsed = results.count();
        results.apps = filters.apply(results.apps);
        results.apps.truncate(self.options.number);

        info!("Found {} apps ({} parsed)", results.count(), parsed);

        Ok(results)
    }

    /// Origin of the page URL, used to resolve relative app links.
    fn link_base(&self) -> String {
        Url::parse(&self.url)
            .ok()
            .map(|u| u.origin().ascii_serialization())
            .filter(|origin| origin != "null")
            .unwrap_or_else(|| PLAY_ORIGIN.to_string())
    }
}
