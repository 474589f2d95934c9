use crate::config::types::{CrawlConfig, DomainConfig, HarvestConfig, OutputConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &HarvestConfig) -> Result<(), ConfigError> {
    validate_crawl_config(&config.crawl)?;
    validate_domain_config(&config.domains)?;
    validate_output_config(&config.output)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates seeds and concurrency
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.seeds.is_empty() {
        return Err(ConfigError::Validation(
            "at least one seed URL is required".to_string(),
        ));
    }

    for seed in &config.seeds {
        let url = Url::parse(seed)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "Seed URL '{}' must use http or https",
                seed
            )));
        }
    }

    if config.max_concurrent_pages < 1 || config.max_concurrent_pages > 100 {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_pages must be between 1 and 100, got {}",
            config.max_concurrent_pages
        )));
    }

    Ok(())
}

fn validate_domain_config(config: &DomainConfig) -> Result<(), ConfigError> {
    for entry in config.allowed.iter().chain(config.excluded.iter()) {
        validate_domain_entry(entry)?;
    }
    Ok(())
}

/// Domain entries are substrings, so only emptiness and whitespace are rejected
fn validate_domain_entry(entry: &str) -> Result<(), ConfigError> {
    if entry.is_empty() {
        return Err(ConfigError::InvalidPattern(
            "Domain entry cannot be empty".to_string(),
        ));
    }

    if entry.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain entry '{}' cannot contain whitespace",
            entry
        )));
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    if config.index_file.trim().is_empty() {
        return Err(ConfigError::Validation(
            "index_file cannot be empty".to_string(),
        ));
    }

    if config.index_file.contains(['/', '\\']) {
        return Err(ConfigError::Validation(format!(
            "index_file must be a bare file name, got '{}'",
            config.index_file
        )));
    }

    Ok(())
}

fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters, hyphens and underscores, got '{}'",
            config.crawler_name
        )));
    }

    Ok(())
}
