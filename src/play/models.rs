//! Data models for Google Play apps and search results.

use serde::{Deserialize, Serialize};

/// An app listing from a store search page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    /// Package name (e.g. `com.imangi.templerun`)
    pub app_id: String,
    /// App title
    pub title: String,
    /// Full details page URL
    pub url: String,
    /// Developer name if shown
    pub developer: Option<String>,
    /// Icon URL
    pub icon_url: Option<String>,
    /// Average star rating
    pub score: Option<f32>,
    /// Listed price
    pub price: Price,
}

impl App {
    /// Returns true if the app is free to install.
    pub fn is_free(&self) -> bool {
        self.price.is_free()
    }

    /// Returns true if the app is on sale.
    pub fn is_discounted(&self) -> bool {
        self.price.original.is_some()
    }

    /// Returns discount percentage if on sale.
    pub fn discount_percent(&self) -> Option<u8> {
        self.price.original.filter(|orig| *orig > 0.0).map(|orig| {
            let discount = ((orig - self.price.value) / orig * 100.0).round() as u8;
            discount.min(100)
        })
    }
}

/// Price as listed on the store page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Current price (0.0 for free apps)
    pub value: f64,
    /// Price before a sale, when shown struck through
    pub original: Option<f64>,
    /// Display text as shown on the page (e.g. "$0.99")
    pub text: String,
}

impl Price {
    /// Price of a free app.
    pub fn free() -> Self {
        Self { value: 0.0, original: None, text: "Free".to_string() }
    }

    /// Creates a price with just the current value.
    pub fn simple(value: f64, text: impl Into<String>) -> Self {
        Self { value, original: None, text: text.into() }
    }

    /// Creates a sale price.
    pub fn with_discount(value: f64, original: f64, text: impl Into<String>) -> Self {
        Self { value, original: Some(original), text: text.into() }
    }

    pub fn is_free(&self) -> bool {
        self.value == 0.0
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::free()
    }
}

/// Apps parsed from a single search page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// URL the page was fetched from
    pub url: String,
    /// Apps in page order
    pub apps: Vec<App>,
}

impl SearchResults {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), apps: Vec::new() }
    }

    /// Returns number of apps.
    pub fn count(&self) -> usize {
        self.apps.len()
    }

    /// Returns true if no apps were found.
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}
