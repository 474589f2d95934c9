use url::Url;

/// Extracts the host from a URL, lowercased
///
/// The port is not part of the result. Returns `None` for URLs without a host,
/// such as `mailto:` or `data:` links.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use markdown_harvester::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM:8443/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("mailto:someone@example.com").unwrap();
/// assert_eq!(extract_domain(&url), None);
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Parses a URL string and extracts its host in one step
pub fn domain_of(url: &str) -> Option<String> {
    Url::parse(url).ok().as_ref().and_then(extract_domain)
}
