//! Scrape configuration with sensible defaults.
//!
//! [`ScrapeConfig`] controls where patent pages are fetched from and how the
//! HTTP client identifies itself. The defaults target Google Patents.

use crate::error::ScrapeError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Default location patent pages are served from.
pub const DEFAULT_BASE_URL: &str = "https://patents.google.com/patent";

/// Default document kind appended to the canonical key (granted patent).
pub const DEFAULT_KIND_SUFFIX: &str = "B2";

/// Configuration for patent page retrieval.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour. Every field is optional when
/// deserialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Base URL that canonical keys are appended to.
    pub base_url: String,
    /// Document kind code appended to the canonical key.
    pub kind_suffix: String,
    /// Custom User-Agent string. If `None`,
    /// [`DEFAULT_USER_AGENT`](crate::http::DEFAULT_USER_AGENT) is sent.
    pub user_agent: Option<String>,
    /// Optional whole-request timeout in seconds. `None` waits indefinitely.
    pub timeout_seconds: Option<u64>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            kind_suffix: DEFAULT_KIND_SUFFIX.to_owned(),
            user_agent: None,
            timeout_seconds: None,
        }
    }
}

impl ScrapeConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `base_url` must parse as an `http` or `https` URL
    /// - `kind_suffix` must be ASCII alphanumeric
    /// - `timeout_seconds`, when set, must be greater than 0
    pub fn validate(&self) -> Result<(), ScrapeError> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| ScrapeError::Config(format!("base_url is not a valid URL: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ScrapeError::Config(
                "base_url must use http or https".into(),
            ));
        }
        if !self.kind_suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ScrapeError::Config(
                "kind_suffix must be ASCII alphanumeric".into(),
            ));
        }
        if self.timeout_seconds == Some(0) {
            return Err(ScrapeError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
