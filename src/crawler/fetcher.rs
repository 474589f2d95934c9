//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the shared HTTP client with a proper user agent string
//! - GET requests to fetch page markup
//! - Classifying failures so callers can skip the page
//!
//! Failures are values, not errors: a page that cannot be fetched is simply
//! unavailable and the crawl moves on. No retries are attempted.

use crate::config::UserAgentConfig;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, unreadable body, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the page markup, or `None` if the page is unavailable
    pub fn into_markup(self) -> Option<String> {
        match self {
            Self::Success { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Source of page markup
///
/// The coordinator only talks to the network through this trait, which keeps
/// transport concerns (pooling, timeouts, status handling) out of the crawl
/// logic and lets tests substitute canned pages.
pub trait PageFetcher {
    /// Fetches `url`, reporting failures through [`FetchResult`]
    fn fetch(&self, url: &str) -> impl Future<Output = FetchResult> + Send;
}

/// [`PageFetcher`] backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher with a fresh client for the given user agent
    pub fn from_config(config: &UserAgentConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?))
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        fetch_url(&self.client, url).await
    }
}

/// Builds an HTTP client with proper configuration
///
/// One client is built per run; its connection pool is shared by every page
/// fetch.
///
/// # Example
///
/// ```no_run
/// use markdown_harvester::config::UserAgentConfig;
/// use markdown_harvester::crawler::build_http_client;
///
/// let config = UserAgentConfig {
///     crawler_name: "MarkdownHarvester".to_string(),
///     crawler_version: "1.0".to_string(),
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version
    let user_agent = format!("{}/{}", config.crawler_name, config.crawler_version);

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 2xx | Success |
/// | Any other status | HttpError |
/// | Timeout, connection refused, TLS error | NetworkError |
/// | Body cannot be read | NetworkError |
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if !status.is_success() {
                tracing::warn!(
                    "Page {} returned status {}, moving on to the next page",
                    url,
                    status.as_u16()
                );
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => {
                    tracing::warn!("Failed to read body of {}: {}", url, e);
                    FetchResult::NetworkError {
                        error: e.to_string(),
                    }
                }
            }
        }
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection refused".to_string()
            } else {
                e.to_string()
            };
            tracing::warn!(
                "Could not connect to {} ({}), moving on to the next page",
                url,
                error
            );
            FetchResult::NetworkError { error }
        }
    }
}
