//! Scraper options shared by every store request.

use serde::{Deserialize, Serialize};

/// Options for a scraper run.
///
/// Locale fields are sent with the request; the rest are applied to the
/// parsed results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Store country (`gl` parameter)
    #[serde(default = "default_country")]
    pub country: String,

    /// Store language (`hl` parameter)
    #[serde(default = "default_language")]
    pub language: String,

    /// Maximum number of apps to return
    #[serde(default = "default_number")]
    pub number: usize,

    /// Only keep apps on sale
    #[serde(default)]
    pub discount: bool,

    /// Minimum price
    #[serde(default)]
    pub price_min: Option<f64>,

    /// Maximum price
    #[serde(default)]
    pub price_max: Option<f64>,

    /// Minimum star rating
    #[serde(default)]
    pub score_min: Option<f32>,

    /// Maximum star rating
    #[serde(default)]
    pub score_max: Option<f32>,
}

fn default_country() -> String {
    "us".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_number() -> usize {
    50
}

impl Default for Options {
    fn default() -> Self {
        Self {
            country: default_country(),
            language: default_language(),
            number: default_number(),
            discount: false,
            price_min: None,
            price_max: None,
            score_min: None,
            score_max: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert_eq!(options.country, "us");
        assert_eq!(options.language, "en");
        assert_eq!(options.number, 50);
        assert!(!options.discount);
        assert!(options.price_min.is_none());
        assert!(options.price_max.is_none());
        assert!(options.score_min.is_none());
        assert!(options.score_max.is_none());
    }

    #[test]
    fn test_options_partial_deserialize() {
        let options: Options = serde_json::from_str(r#"{"country": "br", "score_min": 4.0}"#).unwrap();
        assert_eq!(options.country, "br");
        assert_eq!(options.language, "en");
        assert_eq!(options.number, 50);
        assert_eq!(options.score_min, Some(4.0));
    }
}
