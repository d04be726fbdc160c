//! Patent identifier normalisation.
//!
//! Turns free-form user input (`"us 8,848,839"`, `"8848839"`) into the
//! canonical key used in patent page URLs (`"US8848839"`).

/// Country prefix assumed for bare numeric identifiers.
const DEFAULT_COUNTRY: &str = "US";

/// Normalise a user-supplied patent identifier into a canonical key.
///
/// 1. Upper-case the input.
/// 2. Drop every character that is not an ASCII letter or digit.
/// 3. Keep keys already starting with `US` as-is.
/// 4. Prefix purely numeric keys with `US`.
/// 5. Return anything else (e.g. `EP1234567`) unchanged.
///
/// Never fails; empty or all-punctuation input yields `""`.
///
/// # Examples
///
/// ```
/// use patent_scrape::normalize::normalize_patent_number;
///
/// assert_eq!(normalize_patent_number("US8,848,839"), "US8848839");
/// assert_eq!(normalize_patent_number("8848839"), "US8848839");
/// assert_eq!(normalize_patent_number("EP1234567"), "EP1234567");
/// ```
pub fn normalize_patent_number(raw: &str) -> String {
    let cleaned: String = raw
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect();

    if cleaned.starts_with(DEFAULT_COUNTRY) {
        return cleaned;
    }
    if !cleaned.is_empty() && cleaned.chars().all(|c| c.is_ascii_digit()) {
        return format!("{DEFAULT_COUNTRY}{cleaned}");
    }
    cleaned
}

/// Build the patent page URL for a canonical key.
///
/// Produces `<base_url>/<key><kind_suffix>/`, ignoring any trailing slash on
/// `base_url`.
pub fn patent_url(base_url: &str, key: &str, kind_suffix: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!("{base}/{key}{kind_suffix}/")
}
