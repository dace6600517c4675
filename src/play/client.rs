//! HTTP client for Google Play requests using wreq for TLS fingerprint emulation.

use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Trait for fetching store pages - enables mocking for tests.
#[async_trait]
pub trait PlayFetch: Send + Sync {
    /// Fetches `url` and returns the HTML body.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Google Play HTTP client with browser impersonation and anti-bot measures.
pub struct PlayClient {
    client: Client,
    accept_language: String,
    delay_ms: u64,
    delay_jitter_ms: u64,
}

impl PlayClient {
    /// Creates a new client with the given configuration.
    pub async fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            accept_language: accept_language(&config.language),
            delay_ms: config.delay_ms,
            delay_jitter_ms: config.delay_jitter_ms,
        })
    }

    /// Performs a GET request with all anti-bot measures.
    async fn get(&self, url: &str) -> Result<String> {
        self.delay().await;

        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8")
            .header("Accept-Language", self.accept_language.as_str())
            .header("Accept-Encoding", "gzip, deflate, br")
            .header("Cache-Control", "no-cache")
            .header("Pragma", "no-cache")
            .header("Sec-Fetch-Dest", "document")
            .header("Sec-Fetch-Mode", "navigate")
            .header("Sec-Fetch-Site", "none")
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == 429 || status == 503 {
            warn!("Rate limited ({}). Consider using a proxy or increasing delay.", status);
            anyhow::bail!("Rate limited by Google Play. Try increasing --delay or using a proxy.");
        }

        if !status.is_success() {
            anyhow::bail!("Request failed with status: {}", status);
        }

        response.text().await.context("Failed to read response body")
    }

    /// Adds a random delay to mimic human behavior.
    async fn delay(&self) {
        if self.delay_ms == 0 {
            return;
        }

        let jitter = if self.delay_jitter_ms > 0 {
            rand::rng().random_range(0..=self.delay_jitter_ms)
        } else {
            0
        };

        let total_delay = self.delay_ms + jitter;
        debug!("Delaying {}ms", total_delay);
        tokio::time::sleep(Duration::from_millis(total_delay)).await;
    }
}

#[async_trait]
impl PlayFetch for PlayClient {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching: {}", url);
        self.get(url).await
    }
}

/// Builds an Accept-Language header preferring `language`, falling back to English.
fn accept_language(language: &str) -> String {
    let language = language.trim();
    if language.is_empty() || language.eq_ignore_ascii_case("en") {
        "en-US,en;q=0.9".to_string()
    } else {
        format!("{},{};q=0.9,en;q=0.8", language, language.split(['-', '_']).next().unwrap_or(language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_test_config() -> Config {
        Config { delay_ms: 0, delay_jitter_ms: 0, ..Config::default() }
    }

    #[test]
    fn test_accept_language() {
        assert_eq!(accept_language("en"), "en-US,en;q=0.9");
        assert_eq!(accept_language(""), "en-US,en;q=0.9");
        assert_eq!(accept_language("de"), "de,de;q=0.9,en;q=0.8");
        assert_eq!(accept_language("pt-BR"), "pt-BR,pt;q=0.9,en;q=0.8");
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mock_server = MockServer::start().await;

        let html = r#"<html><body><a href="/store/apps/details?id=com.test">Test App</a></body></html>"#;

        Mock::given(method("GET"))
            .and(path("/store/search"))
            .and(query_param("q", "test"))
            .respond_with(ResponseTemplate::new(200).set_body_string(html))
            .mount(&mock_server)
            .await;

        let client = PlayClient::new(&make_test_config()).await.unwrap();
        let url = format!("{}/store/search?c=apps&price=0&q=test", mock_server.uri());

        let body = client.fetch(&url).await.unwrap();
        assert!(body.contains("com.test"));
    }

    #[tokio::test]
    async fn test_rate_limited_429() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/store/search"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let client = PlayClient::new(&make_test_config()).await.unwrap();
        let url = format!("{}/store/search", mock_server.uri());

        let err = client.fetch(&url).await.unwrap_err().to_string();
        assert!(err.contains("Rate limited"));
    }

    #[tokio::test]
    async fn test_rate_limited_503() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/store/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = PlayClient::new(&make_test_config()).await.unwrap();
        let url = format!("{}/store/search", mock_server.uri());

        assert!(client.fetch(&url).await.is_err());
    }

    #[tokio::test]
    async fn test_http_error_404() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/store/search"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = PlayClient::new(&make_test_config()).await.unwrap();
        let url = format!("{}/store/search", mock_server.uri());

        let err = client.fetch(&url).await.unwrap_err().to_string();
        assert!(err.contains("404"));
    }

    #[tokio::test]
    async fn test_empty_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/store/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&mock_server)
            .await;

        let client = PlayClient::new(&make_test_config()).await.unwrap();
        let url = format!("{}/store/search", mock_server.uri());

        assert!(client.fetch(&url).await.unwrap().is_empty());
    }
}
