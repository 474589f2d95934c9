//! Default configuration tables
//!
//! These are passed explicitly into [`HarvestConfig`](super::HarvestConfig) when a
//! value is not supplied, so nothing in the pipeline reads them implicitly.

/// Domains skipped unless the caller supplies its own deny-list
pub const DEFAULT_EXCLUDED_DOMAINS: &[&str] = &[
    "google.com",
    "facebook.com",
    "youtube.com",
    "github.com",
    "t.me",
    "linkedin.com",
    "instagram.com",
    "twitter.com",
];

/// Tags the Markdown converter omits
pub const DEFAULT_STRIP_TAGS: &[&str] = &["img", "footer", "nav", "label", "input", "script"];

/// Full `class` attribute values whose elements are pruned before conversion
pub const DEFAULT_STRIP_CLASSES: &[&str] = &[
    "fs-2 me-2 nav-link",
    "modal-title fs-5",
    "nav-link",
    "btn",
    "col-form-label",
];

/// Name of the generated index file
pub const DEFAULT_INDEX_FILE: &str = "INDEX.md";

/// Directory pages are written to when none is configured
pub const DEFAULT_OUTPUT_DIR: &str = "./misc";

/// Pages processed at once; 1 keeps the crawl strictly sequential
pub const DEFAULT_MAX_CONCURRENT_PAGES: usize = 1;

pub const DEFAULT_CRAWLER_NAME: &str = "MarkdownHarvester";

pub const DEFAULT_CRAWLER_VERSION: &str = "1.0";

/// Converts a constant table into an owned list
pub fn to_owned_list(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}
