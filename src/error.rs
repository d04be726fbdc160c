//! Error types for the patent claims service.

use axum::http::StatusCode;
use patent_scrape::ScrapeError;

/// Errors raised while configuring or starting the service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// HTTP listener error.
    #[error("server error: {0}")]
    Server(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Outcome classes of a single claims lookup that did not produce claims.
///
/// Each variant maps to its own status code and caller-facing message.
/// Detail strings are for logs only.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// No identifier supplied, or only whitespace.
    #[error("patent number is required")]
    MissingIdentifier,

    /// The page was retrieved but neither extraction tier found a claim.
    #[error("no claims found")]
    NoClaimsFound,

    /// Transport failure or non-success status from the patent site.
    #[error("retrieval failed: {0}")]
    Retrieval(String),

    /// Anything else.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl LookupError {
    /// HTTP status returned to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingIdentifier => StatusCode::BAD_REQUEST,
            Self::NoClaimsFound => StatusCode::NOT_FOUND,
            Self::Retrieval(_) => StatusCode::BAD_GATEWAY,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller. Never includes failure details.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingIdentifier => "Patent number is required",
            Self::NoClaimsFound => "No claims found for this patent number",
            Self::Retrieval(_) => "Failed to fetch patent data",
            Self::Unexpected(_) => "Internal error",
        }
    }
}

impl From<ScrapeError> for LookupError {
    fn from(err: ScrapeError) -> Self {
        match err {
            ScrapeError::Http(detail) => Self::Retrieval(detail),
            err @ ScrapeError::Config(_) => Self::Unexpected(err.to_string()),
        }
    }
}
