//! HTTP retrieval of patent pages.
//!
//! Provides a [`reqwest::Client`] with a browser-like User-Agent and a single
//! GET helper that folds every failure into [`ScrapeError::Http`].

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use std::time::Duration;

/// Desktop browser User-Agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Build a [`reqwest::Client`] configured for patent page retrieval.
///
/// The client has:
/// - Custom User-Agent if configured, otherwise [`DEFAULT_USER_AGENT`]
/// - Request timeout only when `timeout_seconds` is set
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`ScrapeError::Http`] if the client cannot be constructed.
pub fn build_client(config: &ScrapeConfig) -> Result<reqwest::Client, ScrapeError> {
    let ua = config
        .user_agent
        .as_deref()
        .unwrap_or(DEFAULT_USER_AGENT);

    let mut builder = reqwest::Client::builder()
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10));
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder
        .build()
        .map_err(|e| ScrapeError::Http(format!("failed to build HTTP client: {e}")))
}

/// GET `url` and return the response body as text.
///
/// Transport failures and non-success statuses are not distinguished
/// past this point.
///
/// # Errors
///
/// Returns [`ScrapeError::Http`] if the request fails, the server answers
/// with a non-success status, or the body cannot be read.
pub async fn fetch_document(client: &reqwest::Client, url: &str) -> Result<String, ScrapeError> {
    tracing::trace!(url, "fetching patent page");

    let response = client
        .get(url)
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| ScrapeError::Http(format!("patent page request failed: {e}")))?
        .error_for_status()
        .map_err(|e| ScrapeError::Http(format!("patent page HTTP error: {e}")))?;

    let html = response
        .text()
        .await
        .map_err(|e| ScrapeError::Http(format!("patent page read failed: {e}")))?;

    tracing::trace!(bytes = html.len(), "patent page received");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn build_client_with_default_config() {
        assert!(build_client(&ScrapeConfig::default()).is_ok());
    }

    #[test]
    fn build_client_with_custom_ua_and_timeout() {
        let config = ScrapeConfig {
            user_agent: Some("CustomBot/1.0".into()),
            timeout_seconds: Some(3),
            ..Default::default()
        };
        assert!(build_client(&config).is_ok());
    }

    #[tokio::test]
    async fn fetch_document_sends_configured_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/patent/US1B2/"))
            .and(header("user-agent", "CustomBot/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(1)
            .mount(&server)
            .await;

        let config = ScrapeConfig {
            user_agent: Some("CustomBot/1.0".into()),
            ..Default::default()
        };
        let client = build_client(&config).expect("client");
        let body = fetch_document(&client, &format!("{}/patent/US1B2/", server.uri()))
            .await
            .expect("fetch");
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn fetch_document_sends_default_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(2)
            .mount(&server)
            .await;

        // Every client built from the default config sends the same header.
        for _ in 0..2 {
            let client = build_client(&ScrapeConfig::default()).expect("client");
            let body = fetch_document(&client, &server.uri()).await.expect("fetch");
            assert_eq!(body, "ok");
        }
    }

    #[tokio::test]
    async fn fetch_document_maps_error_status_to_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = build_client(&ScrapeConfig::default()).expect("client");
        let err = fetch_document(&client, &server.uri()).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Http(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn fetch_document_maps_connection_failure_to_http_error() {
        let client = build_client(&ScrapeConfig::default()).expect("client");
        // Port 9 (discard) on loopback is not expected to accept HTTP.
        let err = fetch_document(&client, "http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(err, ScrapeError::Http(_)));
    }
}
