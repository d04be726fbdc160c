//! # patent-scrape
//!
//! Patent claims lookup: identifier normalisation, page retrieval, and
//! claims extraction.
//!
//! ## Design
//!
//! - Normalises free-form identifiers (`"us 8,848,839"`) into canonical keys
//! - Fetches the public Google Patents page with a browser-like User-Agent
//! - Reads the `section[itemprop="claims"]` landmark when the page has one
//! - Falls back to a loosely bounded "Claims" section of the whole document
//! - Splits claim text on `<digits>.` markers, first occurrence of a number wins
//!
//! No retries, no caching, no shared state between calls. An empty
//! [`ClaimsResult`] is a successful lookup that found nothing.
//!
//! ## Security
//!
//! - Opens no listening sockets
//! - Fetched URLs are logged only at trace level

pub mod config;
pub mod error;
pub mod extract;
pub mod http;
pub mod normalize;
pub mod page;
pub mod types;

pub use config::ScrapeConfig;
pub use error::{Result, ScrapeError};
pub use extract::{extract_claims, find_claims_section, split_claims};
pub use normalize::{normalize_patent_number, patent_url};
pub use page::{claims_from_html, parse_patent_page};
pub use types::{Claim, ClaimsResult, PatentPage};

/// Look up the claims of a patent.
///
/// Validates `config`, normalises `patent_number` into a canonical key,
/// fetches `<base_url>/<key><kind_suffix>/`, and extracts the claims from the
/// returned page. An empty result is `Ok`.
///
/// # Errors
///
/// Returns [`ScrapeError::Config`] if `config` is invalid, or
/// [`ScrapeError::Http`] if the page cannot be fetched or the server answers
/// with a non-success status.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> patent_scrape::Result<()> {
/// let config = patent_scrape::ScrapeConfig::default();
/// let claims = patent_scrape::fetch_claims("US8,848,839", &config).await?;
/// for claim in &claims {
///     println!("{}. {}", claim.number, claim.text);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn fetch_claims(patent_number: &str, config: &ScrapeConfig) -> Result<ClaimsResult> {
    config.validate()?;

    let key = normalize_patent_number(patent_number);
    let url = patent_url(&config.base_url, &key, &config.kind_suffix);
    tracing::debug!(%key, "looking up patent claims");

    let client = http::build_client(config)?;
    let html = http::fetch_document(&client, &url).await?;

    Ok(claims_from_html(&html))
}
