//! Patent page inspection: pulls the claims landmark and document text out
//! of raw HTML.
//!
//! Google Patents marks the claims with `section[itemprop="claims"]`. The
//! landmark is optional; when it is missing extraction falls back to the
//! whole document body.

use scraper::{ElementRef, Html, Selector};

use crate::extract::extract_claims;
use crate::types::{ClaimsResult, PatentPage};

/// Structural marker of the claims region.
const CLAIMS_LANDMARK: &str = r#"section[itemprop="claims"]"#;

/// Elements whose text never belongs to the readable document.
const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Parse raw HTML into the landmark region and whole-document text.
///
/// Text is the concatenation of all text nodes, so line breaks present in
/// the markup survive. Script and style bodies are left out. When the page
/// carries several claims landmarks their text is joined in document order.
pub fn parse_patent_page(html: &str) -> PatentPage {
    let document = Html::parse_document(html);

    let claims_region = select_all_text(&document, CLAIMS_LANDMARK);
    let document_text = select_first(&document, "body")
        .map(flatten_text)
        .unwrap_or_else(|| flatten_text(document.root_element()));

    tracing::trace!(
        has_landmark = claims_region.is_some(),
        chars = document_text.len(),
        "patent page parsed"
    );

    PatentPage {
        claims_region,
        document_text,
    }
}

/// Parse a patent page and extract its claims with the two-tier strategy.
pub fn claims_from_html(html: &str) -> ClaimsResult {
    let page = parse_patent_page(html);
    extract_claims(page.claims_region.as_deref(), &page.document_text)
}

fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let Ok(selector) = Selector::parse(selector) else {
        return None;
    };
    document.select(&selector).next()
}

/// Joined text of every element matching `selector`, or `None` if none match.
fn select_all_text(document: &Html, selector: &str) -> Option<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return None;
    };
    let mut matches = document.select(&selector).peekable();
    matches.peek()?;
    Some(matches.map(flatten_text).collect())
}

fn flatten_text(element: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let parent = node
                .parent()
                .and_then(|p| p.value().as_element().map(|el| el.name()));
            if parent.is_some_and(|name| NON_CONTENT_TAGS.contains(&name)) {
                return None;
            }
            Some(&**text)
        })
        .collect()
}
