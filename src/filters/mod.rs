//! App filtering system with composable filters.

pub mod price;
pub mod score;

use crate::play::{App, Options};

pub use price::PriceFilter;
pub use score::ScoreFilter;

/// Trait for filtering apps.
pub trait Filter: Send + Sync {
    /// Returns true if the app passes the filter.
    fn matches(&self, app: &App) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// A chain of filters that must all pass.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Checks if an app passes all filters.
    pub fn matches(&self, app: &App) -> bool {
        self.filters.iter().all(|f| f.matches(app))
    }

    /// Filters a collection of apps, keeping order.
    pub fn apply(&self, apps: Vec<App>) -> Vec<App> {
        apps.into_iter().filter(|a| self.matches(a)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a FilterChain from scraper options.
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self { chain: FilterChain::new() }
    }

    /// Creates a builder with every filter the options ask for.
    pub fn from_options(options: &Options) -> Self {
        Self::new()
            .price_range(options.price_min, options.price_max)
            .score_range(options.score_min, options.score_max)
            .discount_only(options.discount)
    }

    /// Adds a price range filter.
    pub fn price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        if min.is_some() || max.is_some() {
            self.chain.add(PriceFilter::new(min, max));
        }
        self
    }

    /// Adds a star rating filter.
    pub fn score_range(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        if min.is_some() || max.is_some() {
            self.chain.add(ScoreFilter::new(min, max));
        }
        self
    }

    /// Adds a filter keeping only discounted apps.
    pub fn discount_only(mut self, enabled: bool) -> Self {
        if enabled {
            self.chain.add(DiscountFilter::new());
        }
        self
    }

    /// Builds the filter chain.
    pub fn build(self) -> FilterChain {
        self.chain
    }
}

impl Default for FilterChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter that keeps only apps currently on sale.
pub struct DiscountFilter;

impl DiscountFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DiscountFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for DiscountFilter {
    fn matches(&self, app: &App) -> bool {
        app.is_discounted()
    }

    fn description(&self) -> String {
        "On sale only".to_string()
    }
}
