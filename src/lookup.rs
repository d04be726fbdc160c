//! Request boundary: turns a caller-supplied identifier into claims or a
//! classified [`LookupError`].

use crate::error::LookupError;
use patent_scrape::{ClaimsResult, ScrapeConfig};

/// Look up the claims for a caller-supplied patent identifier.
///
/// Retrieval is never attempted when the identifier is missing or blank.
/// An empty extraction result becomes [`LookupError::NoClaimsFound`] so the
/// caller can tell "not found" apart from a failed retrieval.
///
/// # Errors
///
/// Returns the [`LookupError`] class of whatever went wrong.
pub async fn lookup_claims(
    patent_number: Option<&str>,
    config: &ScrapeConfig,
) -> Result<ClaimsResult, LookupError> {
    let Some(raw) = patent_number.map(str::trim).filter(|s| !s.is_empty()) else {
        return Err(LookupError::MissingIdentifier);
    };

    let claims = patent_scrape::fetch_claims(raw, config).await?;
    if claims.is_empty() {
        return Err(LookupError::NoClaimsFound);
    }
    Ok(claims)
}
