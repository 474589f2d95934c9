//! Link extraction from a page's markup
//!
//! Every `<a href>` becomes a [`Link`] holding the absolute URL and the anchor
//! text, in document order. The HTML5 parser recovers from malformed markup,
//! so extraction never fails as a whole.

use scraper::{ElementRef, Html, Selector};
use url::Url;

/// An outbound link found on a page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    /// Absolute URL after resolving the href against the page URL
    pub url: String,

    /// Anchor text with whitespace collapsed; empty when the anchor has none
    pub text: String,
}

impl Link {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }
}

/// Extracts all links from the HTML document
///
/// Relative, scheme-relative and fragment-only hrefs are resolved against
/// `base_url`; absolute hrefs are kept. Anchors without an `href` are skipped,
/// as are hrefs the URL parser rejects.
///
/// # Example
///
/// ```
/// use markdown_harvester::crawler::{extract_links, Link};
/// use url::Url;
///
/// let html = r#"<a href="/page1">Page 1</a><a href="https://anotherdomain.com/page2">Page 2</a>"#;
/// let base = Url::parse("https://example.com").unwrap();
///
/// assert_eq!(
///     extract_links(html, &base),
///     vec![
///         Link::new("https://example.com/page1", "Page 1"),
///         Link::new("https://anotherdomain.com/page2", "Page 2"),
///     ]
/// );
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> Vec<Link> {
    let document = Html::parse_document(html);

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| {
            let href = element.value().attr("href")?;
            let url = resolve_link(href, base_url)?;
            Some(Link {
                url,
                text: anchor_text(element),
            })
        })
        .collect()
}

/// Resolves an href against the page URL
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    match base_url.join(href.trim()) {
        Ok(absolute_url) => Some(absolute_url.to_string()),
        Err(e) => {
            tracing::debug!("Skipping unresolvable href {:?}: {}", href, e);
            None
        }
    }
}

/// Concatenates the anchor's text nodes and collapses whitespace runs
fn anchor_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
