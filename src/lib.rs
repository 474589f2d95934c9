//! Markdown-Harvester: turns a web page and the pages it links to into Markdown notes
//!
//! This crate fetches a seed page, follows its direct links that pass a domain
//! policy, converts every page to cleaned Markdown, and writes one file per page
//! together with an index file cross-referencing them.

pub mod config;
pub mod content;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Markdown-Harvester operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::CrawlStage,
        to: state::CrawlStage,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid domain pattern: {0}")]
    InvalidPattern(String),
}

/// Result type alias for Markdown-Harvester operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::HarvestConfig;
pub use content::{transform_page, PageArtifact, TransformSpec};
pub use crawler::{extract_links, harvest, harvest_with, Coordinator, CrawlReport, Link};
pub use output::{build_index, sanitize_filename, write_page, OutputError};
pub use state::{CrawlMode, CrawlStage, PageOutcome};
pub use url::{filter_links, DomainDecision, DomainPolicy};
