//! Configuration module for Markdown-Harvester
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; defaults come from the tables in [`defaults`].
//!
//! # Example
//!
//! ```no_run
//! use markdown_harvester::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Writing pages to {}", config.output.directory.display());
//! ```

pub mod defaults;
mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CrawlConfig, DomainConfig, HarvestConfig, OutputConfig, TransformConfig, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{load_config, parse_config, read_config};
pub use validation::validate;
