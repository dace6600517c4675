//! Integration tests for search query construction and a full scraper run.

use play_scraper::config::Config;
use play_scraper::play::{Options, PlayClient, Scraper};
use play_scraper::{new_query, search_url, PriceQuery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_temple_run_free() {
    let scraper = new_query("temple run", PriceQuery::Free, Options::default()).unwrap();
    assert_eq!(scraper.url(), "https://play.google.com/store/search?c=apps&price=1&q=temple+run");
}

#[test]
fn test_empty_query_all_prices() {
    let scraper = new_query("", PriceQuery::All, Options::default()).unwrap();
    assert_eq!(scraper.url(), "https://play.google.com/store/search?c=apps&price=0&q=");
}

#[test]
fn test_every_price_filter_roundtrips() {
    for price in PriceQuery::all() {
        let url = search_url("a b&c", *price).unwrap();
        let pairs: Vec<(String, String)> =
            url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();

        assert_eq!(
            pairs,
            vec![
                ("c".to_string(), "apps".to_string()),
                ("price".to_string(), price.ordinal().to_string()),
                ("q".to_string(), "a b&c".to_string()),
            ]
        );
        assert_eq!(PriceQuery::try_from(price.ordinal()).unwrap(), *price);
    }
}

#[test]
fn test_queries_are_independent_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let price = PriceQuery::try_from((i % 3) as u8).unwrap();
                new_query(&format!("query {}", i), price, Options::default()).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let scraper = handle.join().unwrap();
        assert!(scraper.url().ends_with(&format!("price={}&q=query+{}", i % 3, i)));
    }
}

#[tokio::test]
async fn test_scraper_run_against_mock_store() {
    let mock_server = MockServer::start().await;

    let html = r#"
        <html><body>
            <a href="/store/apps/details?id=com.imangi.templerun">
                <span class="DdYX5">Temple Run</span>
                <span class="w2kbF">4.1</span>
            </a>
        </body></html>
    "#;

    Mock::given(method("GET"))
        .and(path("/store/search"))
        .and(query_param("q", "temple run"))
        .and(query_param("price", "1"))
        .and(query_param("c", "apps"))
        .and(query_param("hl", "en"))
        .and(query_param("gl", "us"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config { delay_ms: 0, delay_jitter_ms: 0, ..Config::default() };
    let client = PlayClient::new(&config).await.unwrap();

    // Same query string the builder produces, pointed at the mock server.
    let real = search_url("temple run", PriceQuery::Free).unwrap();
    let url = format!("{}{}?{}", mock_server.uri(), real.path(), real.query().unwrap_or_default());
    let scraper = Scraper::new(url, config.options());

    let results = scraper.run(&client).await.unwrap();
    assert_eq!(results.count(), 1);
    assert_eq!(results.apps[0].app_id, "com.imangi.templerun");
    assert!(results.apps[0].url.starts_with(&mock_server.uri()));
}
