//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching of seed and linked pages
//! - HTML parsing and link extraction
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{Coordinator, CrawlReport};
pub use fetcher::{build_http_client, fetch_url, FetchResult, HttpFetcher, PageFetcher};
pub use parser::{extract_links, Link};

use crate::config::{validate, HarvestConfig};
use crate::output::build_index;

/// Runs a complete harvest over HTTP
///
/// This is the main entry point for starting a harvest. It will:
/// 1. Validate the configuration
/// 2. Build the HTTP client
/// 3. Crawl every seed in the configured mode
/// 4. Build the index file over the output directory
///
/// # Arguments
///
/// * `config` - The harvest configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl and index completed; check
///   [`CrawlReport::has_failures`] for pages that could not be written
/// * `Err(HarvestError)` - Configuration, client or output directory failure
pub async fn harvest(config: HarvestConfig) -> crate::Result<CrawlReport> {
    let fetcher = HttpFetcher::from_config(&config.user_agent)?;
    harvest_with(config, fetcher).await
}

/// Runs a complete harvest with a caller-supplied fetcher
pub async fn harvest_with<F: PageFetcher>(
    config: HarvestConfig,
    fetcher: F,
) -> crate::Result<CrawlReport> {
    validate(&config)?;

    let directory = config.output.directory.clone();
    let index_file = config.output.index_file.clone();

    let mut coordinator = Coordinator::new(config, fetcher);
    let report = coordinator.run().await?;

    build_index(&directory, &index_file)?;

    Ok(report)
}
