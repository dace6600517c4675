//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::play::Options;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Store country code (e.g. "us", "de")
    #[serde(default = "default_country")]
    pub country: String,

    /// Store language code (e.g. "en", "pt-BR")
    #[serde(default = "default_language")]
    pub language: String,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Base delay before each request in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Random jitter added to delay (0 to this value)
    #[serde(default = "default_delay_jitter_ms")]
    pub delay_jitter_ms: u64,

    /// Maximum number of apps to return
    #[serde(default = "default_number")]
    pub number: usize,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Filter: only apps on sale
    #[serde(default)]
    pub discount: bool,

    /// Filter: minimum price
    #[serde(default)]
    pub price_min: Option<f64>,

    /// Filter: maximum price
    #[serde(default)]
    pub price_max: Option<f64>,

    /// Filter: minimum star rating
    #[serde(default)]
    pub score_min: Option<f32>,

    /// Filter: maximum star rating
    #[serde(default)]
    pub score_max: Option<f32>,
}

fn default_country() -> String {
    "us".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_delay_ms() -> u64 {
    500
}

fn default_delay_jitter_ms() -> u64 {
    1000
}

fn default_number() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            country: default_country(),
            language: default_language(),
            proxy: None,
            delay_ms: default_delay_ms(),
            delay_jitter_ms: default_delay_jitter_ms(),
            number: default_number(),
            format: OutputFormat::Table,
            discount: false,
            price_min: None,
            price_max: None,
            score_min: None,
            score_max: None,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("play-scraper").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(country) = std::env::var("PLAY_COUNTRY") {
            if !country.trim().is_empty() {
                self.country = country.trim().to_lowercase();
            }
        }

        if let Ok(language) = std::env::var("PLAY_LANGUAGE") {
            if !language.trim().is_empty() {
                self.language = language.trim().to_string();
            }
        }

        if let Ok(proxy) = std::env::var("PLAY_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(delay) = std::env::var("PLAY_DELAY") {
            if let Ok(d) = delay.parse() {
                self.delay_ms = d;
            }
        }

        self
    }

    /// Returns the scraper options carried by this configuration.
    pub fn options(&self) -> Options {
        Options {
            country: self.country.clone(),
            language: self.language.clone(),
            number: self.number,
            discount: self.discount,
            price_min: self.price_min,
            price_max: self.price_max,
            score_min: self.score_min,
            score_max: self.score_max,
        }
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
