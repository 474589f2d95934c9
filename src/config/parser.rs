use crate::config::types::HarvestConfig;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Parses a configuration from TOML text without validating it
///
/// Missing sections and keys take their defaults, and empty deny-list or
/// strip lists fall back to the default tables. The result is not validated
/// because seeds are commonly supplied afterwards on the command line.
pub fn parse_config(content: &str) -> Result<HarvestConfig, ConfigError> {
    let mut config: HarvestConfig = toml::from_str(content)?;
    config.fill_empty_with_defaults();
    Ok(config)
}

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(HarvestConfig)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use markdown_harvester::config::load_config;
///
/// let config = load_config(Path::new("harvest.toml")).unwrap();
/// println!("Seeds: {:?}", config.crawl.seeds);
/// ```
pub fn load_config(path: &Path) -> Result<HarvestConfig, ConfigError> {
    let config = read_config(path)?;
    validate(&config)?;
    Ok(config)
}

/// Reads a configuration file, leaving validation to the caller
pub fn read_config(path: &Path) -> Result<HarvestConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}
