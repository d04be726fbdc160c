//! Error types for the patent-scrape crate.
//!
//! Messages are stable strings suitable for logs. The service layer decides
//! how much of them a caller gets to see.

/// Errors that can occur while retrieving a patent page.
///
/// Normalisation and extraction are infallible; only retrieval and
/// configuration can fail.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// The page could not be fetched: transport failure or non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Invalid scrape configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for patent-scrape results.
pub type Result<T> = std::result::Result<T, ScrapeError>;
