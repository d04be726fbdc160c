//! Core types for extracted claims and inspected patent pages.

use serde::{Deserialize, Serialize};

/// One numbered claim as it appears in a patent document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// The claim label exactly as written in the source text (e.g. `"1"`).
    /// Never re-parsed as an integer.
    pub number: String,
    /// The trimmed body of the claim.
    pub text: String,
}

impl Claim {
    pub fn new(number: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            text: text.into(),
        }
    }
}

/// Ordered claims extracted from one document.
///
/// Claim numbers are unique and appear in first-seen order. An empty result
/// means "no claims found" and is not an error by itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimsResult(Vec<Claim>);

impl ClaimsResult {
    /// Returns `true` when no claims were found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of claims found.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the claims in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Claim> {
        self.0.iter()
    }

    /// Borrow the claims as a slice.
    pub fn as_slice(&self) -> &[Claim] {
        &self.0
    }

    /// Consume the result, returning the ordered claims.
    pub fn into_vec(self) -> Vec<Claim> {
        self.0
    }
}

impl From<Vec<Claim>> for ClaimsResult {
    fn from(claims: Vec<Claim>) -> Self {
        Self(claims)
    }
}

impl IntoIterator for ClaimsResult {
    type Item = Claim;
    type IntoIter = std::vec::IntoIter<Claim>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClaimsResult {
    type Item = &'a Claim;
    type IntoIter = std::slice::Iter<'a, Claim>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Text pulled out of a fetched patent page, ready for claim extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatentPage {
    /// Flattened text of the claims landmark, or `None` when the page has no
    /// such element.
    pub claims_region: Option<String>,
    /// Flattened text of the whole document body.
    pub document_text: String,
}
