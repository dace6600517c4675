//! play-scraper - Fast, stateless Google Play search CLI
//!
//! A Rust implementation with TLS fingerprint emulation for reliable scraping.

use anyhow::Result;
use clap::{Parser, Subcommand};
use play_scraper::commands::SearchCommand;
use play_scraper::config::{Config, OutputFormat};
use play_scraper::search::{search_url, PriceQuery};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "play-scraper",
    version,
    about = "Fast, stateless Google Play search CLI",
    long_about = "Search Google Play apps by query and price with TLS fingerprint emulation."
)]
struct Cli {
    /// Store country code (e.g. us, de, br)
    #[arg(long, global = true, env = "PLAY_COUNTRY")]
    country: Option<String>,

    /// Store language code (e.g. en, de, pt-BR)
    #[arg(long, global = true, env = "PLAY_LANGUAGE")]
    language: Option<String>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "PLAY_PROXY")]
    proxy: Option<String>,

    /// Delay before each request in milliseconds
    #[arg(long, global = true, env = "PLAY_DELAY")]
    delay: Option<u64>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for apps
    #[command(alias = "s")]
    Search {
        /// Search query
        query: String,

        /// Price filter: all, free, paid
        #[arg(short, long, default_value = "all")]
        price: PriceQuery,

        /// Maximum number of results
        #[arg(short, long)]
        number: Option<usize>,

        /// Only show apps on sale
        #[arg(long)]
        discount: bool,

        /// Minimum price
        #[arg(long)]
        price_min: Option<f64>,

        /// Maximum price
        #[arg(long)]
        price_max: Option<f64>,

        /// Minimum star rating (0.0-5.0)
        #[arg(long)]
        score_min: Option<f32>,

        /// Maximum star rating (0.0-5.0)
        #[arg(long)]
        score_max: Option<f32>,
    },

    /// Print the search URL without fetching it
    #[command(alias = "u")]
    Url {
        /// Search query
        query: String,

        /// Price filter: all, free, paid
        #[arg(short, long, default_value = "all")]
        price: PriceQuery,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(country) = cli.country {
        config.country = country.to_lowercase();
    }
    if let Some(language) = cli.language {
        config.language = language;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(delay) = cli.delay {
        config.delay_ms = delay;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    match cli.command {
        Commands::Search {
            query,
            price,
            number,
            discount,
            price_min,
            price_max,
            score_min,
            score_max,
        } => {
            if let Some(n) = number {
                config.number = n;
            }
            config.discount |= discount;
            config.price_min = price_min.or(config.price_min);
            config.price_max = price_max.or(config.price_max);
            config.score_min = score_min.or(config.score_min);
            config.score_max = score_max.or(config.score_max);

            let cmd = SearchCommand::new(config);
            let output = cmd.execute(&query, price).await?;
            println!("{}", output);
        }

        Commands::Url { query, price } => {
            println!("{}", search_url(&query, price)?);
        }
    }

    Ok(())
}
