//! Claim extraction from flattened page text.
//!
//! Extraction runs in two tiers: the claims landmark region first, then a
//! loosely bounded "Claims" section of the whole document if the landmark
//! produced nothing. Both tiers share [`split_claims`], a best-effort
//! segmentation on `<digits>.` markers. Digit-period sequences inside claim
//! bodies (e.g. "35 U.S.C. 112.") split claims spuriously; that is accepted.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Claim, ClaimsResult};

/// A claim label and the whitespace after it: `12. `.
static CLAIM_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\.\s*").expect("invalid claim header regex"));

/// Where the next claim label begins.
static CLAIM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.").expect("invalid claim boundary regex"));

static CLAIMS_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)claims").expect("invalid claims heading regex"));

/// End of a whole-document claims section: a blank line, a newline followed
/// by a letter and period-free text up to a colon (may span lines), or
/// trailing whitespace up to end of text. Letter case is ignored.
static SECTION_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\n\n|\n[a-z][^.]*:|\n\s*\z").expect("invalid section end regex")
});

/// Run the two-tier extraction.
///
/// Tier 1 splits `claims_region` (the landmark text) when present. Only if
/// that yields nothing does Tier 2 look for a "Claims" section in
/// `document_text`. An empty result means neither tier found a claim.
pub fn extract_claims(claims_region: Option<&str>, document_text: &str) -> ClaimsResult {
    if let Some(region) = claims_region {
        let claims = split_claims(region);
        if !claims.is_empty() {
            tracing::debug!(count = claims.len(), tier = "landmark", "claims extracted");
            return claims;
        }
    }

    let Some(section) = find_claims_section(document_text) else {
        tracing::debug!("no claims section in document text");
        return ClaimsResult::default();
    };

    let claims = split_claims(section);
    tracing::debug!(count = claims.len(), tier = "document", "claims extracted");
    claims
}

/// Locate the loosely bounded "Claims" section of a whole document.
///
/// The section starts at the first case-insensitive `claims` and runs to the
/// earliest blank line, `label:` run after a newline, trailing whitespace, or
/// end of text.
/// Returns `None` only when the word does not occur at all.
pub fn find_claims_section(text: &str) -> Option<&str> {
    let heading = CLAIMS_HEADING.find(text)?;
    let end = SECTION_END
        .find_at(text, heading.end())
        .map_or(text.len(), |m| m.start());
    Some(&text[heading.start()..end])
}

/// Split text into numbered claims.
///
/// Each claim is a `<digits>.` label, optional whitespace, and everything up
/// to where the next `<digits>.` label starts (or end of text). Claims with an
/// empty body, and repeats of an already accepted number, are dropped; the
/// first occurrence wins and order of appearance is kept.
///
/// # Examples
///
/// ```
/// use patent_scrape::extract::split_claims;
///
/// let claims = split_claims("1. Foo bar. 2. Baz qux.");
/// assert_eq!(claims.len(), 2);
/// assert_eq!(claims.as_slice()[1].text, "Baz qux.");
/// ```
pub fn split_claims(text: &str) -> ClaimsResult {
    let mut claims = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut pos = 0;

    while let Some(caps) = CLAIM_HEADER.captures_at(text, pos) {
        let (Some(header), Some(number)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let body_start = header.end();
        let body_end = CLAIM_BOUNDARY
            .find_at(text, body_start)
            .map_or(text.len(), |m| m.start());

        let body = text[body_start..body_end].trim();
        if !body.is_empty() && seen.insert(number.as_str()) {
            claims.push(Claim::new(number.as_str(), body));
        }

        pos = body_end;
    }

    ClaimsResult::from(claims)
}
