//! URL handling module for Markdown-Harvester
//!
//! This module provides host extraction, substring domain matching, and the
//! allow/deny domain policy applied to links found on a seed page.

mod domain;
mod matcher;

use crate::crawler::Link;

// Re-export main functions
pub use domain::{domain_of, extract_domain};
pub use matcher::{first_match, host_contains_any};

/// Outcome of checking a host against a [`DomainPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainDecision {
    /// Host passes both lists
    Allowed,
    /// Host contains a deny-list entry
    Excluded,
    /// Allow-list is non-empty and the host contains none of its entries
    NotAllowed,
}

impl DomainDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Allow-list and deny-list of host substrings
///
/// Immutable for the duration of a crawl and safe to share between workers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainPolicy {
    allowed: Vec<String>,
    excluded: Vec<String>,
}

impl DomainPolicy {
    pub fn new(allowed: Vec<String>, excluded: Vec<String>) -> Self {
        Self { allowed, excluded }
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    /// Classifies a host according to the policy
    ///
    /// The deny-list is checked first, so a host matching both lists is
    /// excluded. An empty allow-list places no restriction on hosts.
    ///
    /// # Examples
    ///
    /// ```
    /// use markdown_harvester::url::{DomainDecision, DomainPolicy};
    ///
    /// let policy = DomainPolicy::new(
    ///     vec!["example.com".to_string()],
    ///     vec!["ads.example.com".to_string()],
    /// );
    ///
    /// assert_eq!(policy.classify("www.example.com"), DomainDecision::Allowed);
    /// assert_eq!(policy.classify("ads.example.com"), DomainDecision::Excluded);
    /// assert_eq!(policy.classify("example.org"), DomainDecision::NotAllowed);
    /// ```
    pub fn classify(&self, host: &str) -> DomainDecision {
        if !self.excluded.is_empty() && host_contains_any(host, &self.excluded) {
            return DomainDecision::Excluded;
        }

        if !self.allowed.is_empty() && !host_contains_any(host, &self.allowed) {
            return DomainDecision::NotAllowed;
        }

        DomainDecision::Allowed
    }
}

/// Keeps the links whose host passes the policy, preserving order
///
/// # Examples
///
/// ```
/// use markdown_harvester::crawler::Link;
/// use markdown_harvester::url::{filter_links, DomainPolicy};
///
/// let links = vec![
///     Link::new("https://example.com/page1", "Page 1"),
///     Link::new("https://anotherdomain.com/page2", "Page 2"),
/// ];
/// let policy = DomainPolicy::new(
///     vec!["example.com".to_string()],
///     vec!["anotherdomain.com".to_string()],
/// );
///
/// let kept = filter_links(links, &policy);
/// assert_eq!(kept, vec![Link::new("https://example.com/page1", "Page 1")]);
/// ```
pub fn filter_links(links: Vec<Link>, policy: &DomainPolicy) -> Vec<Link> {
    links
        .into_iter()
        .filter(|link| {
            let Some(host) = domain_of(&link.url) else {
                tracing::debug!("Dropping link without host: {}", link.url);
                return false;
            };

            let decision = policy.classify(&host);
            if decision.is_allowed() {
                return true;
            }

            match decision {
                DomainDecision::Excluded => {
                    tracing::debug!(
                        "Dropping link {} (matches {:?})",
                        link.url,
                        first_match(&host, policy.excluded()).unwrap_or_default()
                    );
                    false
                }
                _ => {
                    tracing::debug!("Dropping link {} (not on allow-list)", link.url);
                    false
                }
            }
        })
        .collect()
}
