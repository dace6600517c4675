//! Search command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::play::{PlayClient, PlayFetch};
use crate::search::{new_query, PriceQuery};
use anyhow::{Context, Result};
use tracing::info;

/// Executes an app search.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, query: &str, price: PriceQuery) -> Result<String> {
        let client = PlayClient::new(&self.config).await.context("Failed to create HTTP client")?;

        self.execute_with_client(&client, query, price).await
    }

    /// Executes the search with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl PlayFetch,
        query: &str,
        price: PriceQuery,
    ) -> Result<String> {
        info!("Searching for: {} (price: {})", query, price);

        let scraper = new_query(query, price, self.config.options())?;
        let results = scraper.run(client).await?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_apps(&results.apps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Mock Play client for testing.
    struct MockPlayClient {
        response: String,
        urls: Mutex<Vec<String>>,
    }

    impl MockPlayClient {
        fn new(response: String) -> Self {
            Self { response, urls: Mutex::new(Vec::new()) }
        }

        fn last_url(&self) -> Option<String> {
            self.urls.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl PlayFetch for MockPlayClient {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(self.response.clone())
        }
    }

    fn make_test_config() -> Config {
        Config { delay_ms: 0, delay_jitter_ms: 0, number: 5, ..Config::default() }
    }

    fn make_search_html(apps: &[(&str, &str, Option<&str>)]) -> String {
        let mut html = String::from("<html><body>");
        for (id, title, price) in apps {
            let price = price
                .map(|p| format!(r#"<span class="VfPpfd">{}</span>"#, p))
                .unwrap_or_default();
            html.push_str(&format!(
                r#"<a href="/store/apps/details?id={}"><span class="DdYX5">{}</span>{}</a>"#,
                id, title, price
            ));
        }
        html.push_str("</body></html>");
        html
    }

    #[tokio::test]
    async fn test_search_command_basic() {
        let html = make_search_html(&[("com.one", "App One", None), ("com.two", "App Two", Some("$0.99"))]);
        let client = MockPlayClient::new(html);
        let cmd = SearchCommand::new(make_test_config());

        let output = cmd.execute_with_client(&client, "temple run", PriceQuery::Free).await.unwrap();
        assert!(output.contains("com.one"));
        assert!(output.contains("App Two"));

        let url = client.last_url().unwrap();
        assert!(url.starts_with("https://play.google.com/store/search?c=apps&price=1&q=temple+run"));
        assert!(url.ends_with("&hl=en&gl=us"));
    }

    #[tokio::test]
    async fn test_search_command_empty_results() {
        let client = MockPlayClient::new("<html></html>".to_string());
        let cmd = SearchCommand::new(make_test_config());

        let output = cmd.execute_with_client(&client, "", PriceQuery::All).await.unwrap();
        assert!(output.contains("No apps found"));
        assert!(client.last_url().unwrap().contains("price=0&q=&hl=en"));
    }

    #[tokio::test]
    async fn test_search_command_max_results() {
        let html = make_search_html(&[
            ("com.a1", "A1", None),
            ("com.a2", "A2", None),
            ("com.a3", "A3", None),
            ("com.a4", "A4", None),
        ]);
        let client = MockPlayClient::new(html);
        let config = Config { number: 2, ..make_test_config() };

        let output = SearchCommand::new(config)
            .execute_with_client(&client, "a", PriceQuery::All)
            .await
            .unwrap();
        assert!(output.contains("com.a1"));
        assert!(output.contains("com.a2"));
        assert!(!output.contains("com.a3"));
    }

    #[tokio::test]
    async fn test_search_command_price_filters() {
        let html = make_search_html(&[
            ("com.free", "Free", None),
            ("com.cheap", "Cheap", Some("$0.99")),
            ("com.pricey", "Pricey", Some("$14.99")),
        ]);
        let client = MockPlayClient::new(html);
        let config = Config { price_min: Some(0.5), price_max: Some(5.0), ..make_test_config() };

        let output = SearchCommand::new(config)
            .execute_with_client(&client, "x", PriceQuery::Paid)
            .await
            .unwrap();
        assert!(output.contains("com.cheap"));
        assert!(!output.contains("com.free"));
        assert!(!output.contains("com.pricey"));
        assert!(client.last_url().unwrap().contains("price=2"));
    }

    #[tokio::test]
    async fn test_search_command_json_format() {
        let html = make_search_html(&[("com.json", "Json App", None)]);
        let client = MockPlayClient::new(html);
        let config = Config { format: OutputFormat::Json, ..make_test_config() };

        let output = SearchCommand::new(config)
            .execute_with_client(&client, "json", PriceQuery::All)
            .await
            .unwrap();
        assert!(output.starts_with('['));
        assert!(output.contains("com.json"));
    }

    #[tokio::test]
    async fn test_search_command_locale() {
        let client = MockPlayClient::new("<html></html>".to_string());
        let config =
            Config { country: "de".to_string(), language: "de".to_string(), ..make_test_config() };

        SearchCommand::new(config).execute_with_client(&client, "karte", PriceQuery::All).await.unwrap();
        assert!(client.last_url().unwrap().ends_with("q=karte&hl=de&gl=de"));
    }
}
