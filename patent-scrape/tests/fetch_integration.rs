//! Integration tests for the normalise → fetch → extract pipeline.
//!
//! Patent pages are served by a local mock server (no network calls). The
//! live Google Patents test is marked `#[ignore]` for manual validation.

use patent_scrape::{ScrapeConfig, ScrapeError, fetch_claims};
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CLAIMS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>US8848839B2 - Google Patents</title></head>
<body>
<article>
<section itemprop="abstract"><div>Abstract 4. text</div></section>
<section itemprop="claims">
  <h2>Claims (3)</h2>
  <div class="claims">
    <div class="claim">1. A method comprising receiving a signal.</div>
    <div class="claim">2. The method of claim 1, further comprising filtering the signal.</div>
    <div class="claim">3. The method of claim 2, wherein filtering is adaptive.</div>
  </div>
</section>
</article>
</body>
</html>"#;

fn config_for(server: &MockServer) -> ScrapeConfig {
    ScrapeConfig {
        base_url: format!("{}/patent", server.uri()),
        user_agent: Some("TestBot/1.0".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn landmark_page_yields_ordered_claims() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/patent/US8848839B2/"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CLAIMS_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let claims = fetch_claims("us 8,848,839", &config_for(&server))
        .await
        .expect("lookup should succeed");

    let numbers: Vec<&str> = claims.iter().map(|c| c.number.as_str()).collect();
    assert_eq!(numbers, vec!["1", "2", "3"]);
    assert_eq!(
        claims.as_slice()[0].text,
        "A method comprising receiving a signal."
    );
    assert_eq!(
        claims.as_slice()[2].text,
        "The method of claim 2, wherein filtering is adaptive."
    );
}

#[tokio::test]
async fn bare_number_is_prefixed_before_fetching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/patent/US8848839B2/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CLAIMS_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let claims = fetch_claims("8848839", &config_for(&server))
        .await
        .expect("lookup should succeed");
    assert_eq!(claims.len(), 3);
}

#[tokio::test]
async fn foreign_identifier_keeps_its_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/patent/EP1234567B2/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CLAIMS_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let claims = fetch_claims("EP 1234567", &config_for(&server))
        .await
        .expect("lookup should succeed");
    assert!(!claims.is_empty());
}

#[tokio::test]
async fn page_without_landmark_falls_back_to_document_text() {
    let server = MockServer::start().await;
    let html = "<html><body><h1>US1B2</h1>\n<div>Claims 1. A lever. 2. The lever of claim 1 made of oak.</div>\n\n<div>Description 5. prior art</div></body></html>";
    Mock::given(method("GET"))
        .and(path("/patent/US1B2/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&server)
        .await;

    let claims = fetch_claims("1", &config_for(&server))
        .await
        .expect("lookup should succeed");
    let numbers: Vec<&str> = claims.iter().map(|c| c.number.as_str()).collect();
    assert_eq!(numbers, vec!["1", "2"]);
}

#[tokio::test]
async fn page_without_claims_is_empty_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>Nothing here</body></html>"),
        )
        .mount(&server)
        .await;

    let claims = fetch_claims("US1", &config_for(&server))
        .await
        .expect("empty page is still a successful lookup");
    assert!(claims.is_empty());
}

#[tokio::test]
async fn not_found_status_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string(CLAIMS_PAGE))
        .mount(&server)
        .await;

    let err = fetch_claims("US8848839", &config_for(&server))
        .await
        .unwrap_err();
    assert!(matches!(err, ScrapeError::Http(_)));
}

#[tokio::test]
async fn server_error_status_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = fetch_claims("US8848839", &config_for(&server))
        .await
        .unwrap_err();
    assert!(matches!(err, ScrapeError::Http(_)));
}

#[tokio::test]
async fn repeated_lookups_are_identical() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CLAIMS_PAGE))
        .expect(2)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let first = fetch_claims("US8848839", &config).await.expect("first");
    let second = fetch_claims("US8848839", &config).await.expect("second");
    assert_eq!(first, second);
}

#[tokio::test]
#[ignore = "requires network access to patents.google.com"]
async fn live_google_patents_lookup() {
    let claims = fetch_claims("US8848839", &ScrapeConfig::default())
        .await
        .expect("live lookup");
    assert!(!claims.is_empty());
    assert_eq!(claims.as_slice()[0].number, "1");
}
