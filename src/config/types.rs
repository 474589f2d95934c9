use crate::config::defaults::{
    to_owned_list, DEFAULT_CRAWLER_NAME, DEFAULT_CRAWLER_VERSION, DEFAULT_EXCLUDED_DOMAINS,
    DEFAULT_INDEX_FILE, DEFAULT_MAX_CONCURRENT_PAGES, DEFAULT_OUTPUT_DIR, DEFAULT_STRIP_CLASSES,
    DEFAULT_STRIP_TAGS,
};
use crate::content::TransformSpec;
use crate::state::CrawlMode;
use crate::url::DomainPolicy;
use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for Markdown-Harvester
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarvestConfig {
    #[serde(default)]
    pub crawl: CrawlConfig,
    #[serde(default)]
    pub domains: DomainConfig,
    #[serde(default)]
    pub transform: TransformConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Pages the crawl starts from
    #[serde(default)]
    pub seeds: Vec<String>,

    /// Only convert the seed pages themselves, without following their links
    #[serde(rename = "single-page", default)]
    pub single_page: bool,

    /// Maximum number of pages fetched and converted at once
    #[serde(
        rename = "max-concurrent-pages",
        default = "default_max_concurrent_pages"
    )]
    pub max_concurrent_pages: usize,
}

/// Allow-list and deny-list of link hosts
#[derive(Debug, Clone, Deserialize)]
pub struct DomainConfig {
    /// Substrings a host must contain (empty list means no restriction)
    #[serde(default)]
    pub allowed: Vec<String>,

    /// Substrings that reject a host
    #[serde(default = "default_excluded")]
    pub excluded: Vec<String>,
}

/// DOM pruning configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TransformConfig {
    #[serde(rename = "strip-tags", default = "default_strip_tags")]
    pub strip_tags: Vec<String>,

    #[serde(rename = "strip-classes", default = "default_strip_classes")]
    pub strip_classes: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving page files and the index
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,

    /// File name of the generated index
    #[serde(rename = "index-file", default = "default_index_file")]
    pub index_file: String,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,
}

impl HarvestConfig {
    /// Builds a configuration for the given seeds with every other value defaulted
    pub fn with_seeds<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        config.crawl.seeds = seeds.into_iter().map(Into::into).collect();
        config
    }

    pub fn mode(&self) -> CrawlMode {
        if self.crawl.single_page {
            CrawlMode::SinglePage
        } else {
            CrawlMode::Full
        }
    }

    pub fn domain_policy(&self) -> DomainPolicy {
        DomainPolicy::new(self.domains.allowed.clone(), self.domains.excluded.clone())
    }

    pub fn transform_spec(&self) -> TransformSpec {
        TransformSpec::new(
            self.transform.strip_tags.clone(),
            self.transform.strip_classes.clone(),
        )
    }

    /// Replaces empty deny-list and strip lists with their default tables
    ///
    /// An empty allow-list is meaningful (no restriction) and is left alone.
    pub fn fill_empty_with_defaults(&mut self) {
        if self.domains.excluded.is_empty() {
            self.domains.excluded = default_excluded();
        }
        if self.transform.strip_tags.is_empty() {
            self.transform.strip_tags = default_strip_tags();
        }
        if self.transform.strip_classes.is_empty() {
            self.transform.strip_classes = default_strip_classes();
        }
        if self.output.directory.as_os_str().is_empty() {
            self.output.directory = default_output_dir();
        }
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seeds: Vec::new(),
            single_page: false,
            max_concurrent_pages: default_max_concurrent_pages(),
        }
    }
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            allowed: Vec::new(),
            excluded: default_excluded(),
        }
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            strip_tags: default_strip_tags(),
            strip_classes: default_strip_classes(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            index_file: default_index_file(),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
        }
    }
}

fn default_max_concurrent_pages() -> usize {
    DEFAULT_MAX_CONCURRENT_PAGES
}

fn default_excluded() -> Vec<String> {
    to_owned_list(DEFAULT_EXCLUDED_DOMAINS)
}

fn default_strip_tags() -> Vec<String> {
    to_owned_list(DEFAULT_STRIP_TAGS)
}

fn default_strip_classes() -> Vec<String> {
    to_owned_list(DEFAULT_STRIP_CLASSES)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_index_file() -> String {
    DEFAULT_INDEX_FILE.to_string()
}

fn default_crawler_name() -> String {
    DEFAULT_CRAWLER_NAME.to_string()
}

fn default_crawler_version() -> String {
    DEFAULT_CRAWLER_VERSION.to_string()
}
