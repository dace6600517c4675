//! HTML parser for Google Play search pages.

use crate::play::models::{App, Price, SearchResults};
use crate::play::selectors::{errors, search};
use anyhow::Result;
use scraper::{ElementRef, Html};
use std::collections::HashSet;
use tracing::{debug, trace, warn};
use url::Url;

/// Origin used to resolve relative links on store pages.
pub const PLAY_ORIGIN: &str = "https://play.google.com";

/// Parser for Google Play HTML pages.
pub struct Parser {
    base_url: String,
}

impl Parser {
    /// Creates a parser resolving relative links against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Parses a search page into structured data.
    pub fn parse_search(&self, html: &str, url: &str) -> Result<SearchResults> {
        let document = Html::parse_document(html);

        self.check_for_errors(&document)?;

        let mut results = SearchResults::new(url);

        if document.select(&search::NO_RESULTS).next().is_some() {
            debug!("Page reports no results");
            return Ok(results);
        }

        let mut seen = HashSet::new();

        for element in document.select(&search::RESULT) {
            match self.parse_app_card(element) {
                Some(app) => {
                    // The featured block repeats the top hit.
                    if !seen.insert(app.app_id.clone()) {
                        trace!("Skipping duplicate card for {}", app.app_id);
                        continue;
                    }
                    trace!("Parsed app: {} - {}", app.app_id, app.title);
                    results.apps.push(app);
                }
                None => warn!("Skipping app card without a package id"),
            }
        }

        debug!("Parsed {} apps from {}", results.count(), url);

        Ok(results)
    }

    /// Checks for CAPTCHA and error pages.
    fn check_for_errors(&self, document: &Html) -> Result<()> {
        if document.select(&errors::CAPTCHA).next().is_some() {
            anyhow::bail!(
                "CAPTCHA detected. Google is blocking requests. \
                Try using a proxy or waiting before retrying."
            );
        }

        if document.select(&errors::ERROR_PAGE).next().is_some() {
            anyhow::bail!(
                "Google Play error page detected. \
                The service may be temporarily unavailable."
            );
        }

        Ok(())
    }

    /// Parses a single app card. Returns `None` when the link has no package id.
    fn parse_app_card(&self, element: ElementRef) -> Option<App> {
        let href = element.value().attr("href")?;
        let url = self.absolute_url(href)?;
        let app_id = url
            .query_pairs()
            .find(|(k, _)| k == search::APP_ID_PARAM)
            .map(|(_, v)| v.into_owned())
            .filter(|id| !id.is_empty())?;

        let title = Self::first_text(element, &search::TITLE)
            .or_else(|| element.value().attr("aria-label").map(|s| s.trim().to_string()))
            .unwrap_or_else(|| app_id.clone());

        let developer = Self::first_text(element, &search::DEVELOPER);

        let icon_url = element.select(&search::ICON).next().and_then(|e| {
            e.value().attr("src").or_else(|| e.value().attr("data-src")).map(String::from)
        });

        let score = element.select(&search::SCORE).next().and_then(|e| {
            let text = e.value().attr("aria-label").map(String::from);
            let text = text.unwrap_or_else(|| e.text().collect::<String>());
            parse_score(&text)
        });

        let price = self.parse_price(element);

        Some(App { app_id, title, url: url.to_string(), developer, icon_url, score, price })
    }

    /// Parses the listed price. Free apps show no price.
    fn parse_price(&self, element: ElementRef) -> Price {
        let Some(text) = Self::first_text(element, &search::PRICE) else {
            return Price::free();
        };

        let Some(value) = parse_price_value(&text) else {
            return Price::free();
        };

        let original = element
            .select(&search::PRICE_ORIGINAL)
            .next()
            .and_then(|e| parse_price_value(&e.text().collect::<String>()));

        Price { value, original, text }
    }

    fn absolute_url(&self, href: &str) -> Option<Url> {
        let base = Url::parse(&self.base_url).ok()?;
        base.join(href).ok()
    }

    fn first_text(element: ElementRef, selector: &scraper::Selector) -> Option<String> {
        element
            .select(selector)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(PLAY_ORIGIN)
    }
}

/// Extracts a star rating from text like "4.5" or "Rated 4,5 stars out of five stars".
fn parse_score(text: &str) -> Option<f32> {
    text.split_whitespace()
        .filter_map(|token| {
            let cleaned: String =
                token.chars().filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',').collect();
            cleaned.trim_matches(|c: char| c == '.' || c == ',').replace(',', ".").parse::<f32>().ok()
        })
        .find(|score| (0.0..=5.0).contains(score))
}

/// Parses a price value, accepting both `1,234.56` and `1.234,56` styles.
fn parse_price_value(text: &str) -> Option<f64> {
    let cleaned: String =
        text.chars().filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',').collect();
    let cleaned = cleaned.trim_matches(|c: char| c == '.' || c == ',');

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let normalized = match (cleaned.rfind(','), cleaned.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (Some(comma), None) if cleaned.len() - comma - 1 <= 2 => cleaned.replace(',', "."),
        (Some(_), None) => cleaned.replace(',', ""),
        (None, Some(dot)) if cleaned.matches('.').count() > 1 || cleaned.len() - dot - 1 == 3 => {
            cleaned.replace('.', "")
        }
        (None, _) => cleaned.to_string(),
    };

    normalized.parse().ok()
}
