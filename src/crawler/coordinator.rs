//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that coordinates:
//! - Fetching each seed page
//! - Extracting and filtering its links (full mode)
//! - Fetching, converting and writing every surviving page
//! - Recording a per-page outcome for the final report

use crate::config::HarvestConfig;
use crate::content::{transform_page, TransformSpec};
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::extract_links;
use crate::output::{ensure_output_dir, write_page};
use crate::state::{CrawlMode, CrawlStage, PageOutcome};
use crate::url::{filter_links, DomainPolicy};
use crate::HarvestError;
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use url::Url;

/// Per-page outcomes of a crawl, in completion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    pub outcomes: Vec<(String, PageOutcome)>,
}

impl CrawlReport {
    pub fn record(&mut self, url: impl Into<String>, outcome: PageOutcome) {
        self.outcomes.push((url.into(), outcome));
    }

    pub fn pages_visited(&self) -> usize {
        self.outcomes.len()
    }

    /// Paths of every page file written
    pub fn written(&self) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter_map(|(_, outcome)| match outcome {
                PageOutcome::Written(path) => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_skipped())
            .count()
    }

    /// Pages whose file could not be written
    pub fn failures(&self) -> Vec<(&str, &PageOutcome)> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_error())
            .map(|(url, outcome)| (url.as_str(), outcome))
            .collect()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|(_, outcome)| outcome.is_error())
    }

    /// Outcome recorded for a URL, if it was visited
    pub fn outcome_for(&self, url: &str) -> Option<&PageOutcome> {
        self.outcomes
            .iter()
            .find(|(visited, _)| visited == url)
            .map(|(_, outcome)| outcome)
    }
}

/// Main crawler coordinator structure
pub struct Coordinator<F> {
    fetcher: F,
    seeds: Vec<String>,
    policy: DomainPolicy,
    spec: TransformSpec,
    directory: PathBuf,
    index_file: String,
    mode: CrawlMode,
    max_concurrent_pages: usize,
    stage: CrawlStage,
}

impl<F: PageFetcher> Coordinator<F> {
    /// Creates a new coordinator instance
    ///
    /// The domain policy and transform spec are fixed here and stay read-only
    /// for the whole run.
    pub fn new(config: HarvestConfig, fetcher: F) -> Self {
        Self {
            policy: config.domain_policy(),
            spec: config.transform_spec(),
            mode: config.mode(),
            fetcher,
            seeds: config.crawl.seeds,
            directory: config.output.directory,
            index_file: config.output.index_file,
            max_concurrent_pages: config.crawl.max_concurrent_pages.max(1),
            stage: CrawlStage::FetchSeed,
        }
    }

    pub fn mode(&self) -> CrawlMode {
        self.mode
    }

    pub fn stage(&self) -> CrawlStage {
        self.stage
    }

    /// Runs the crawl for every seed, in order
    ///
    /// Unavailable or empty pages are logged and skipped. Write failures are
    /// recorded in the report for the caller to act on. The index is not built
    /// here; see [`harvest`](crate::crawler::harvest).
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - All seeds were processed
    /// * `Err(HarvestError)` - The output directory could not be created or a
    ///   seed URL is invalid
    pub async fn run(&mut self) -> Result<CrawlReport, HarvestError> {
        ensure_output_dir(&self.directory)?;

        let mut report = CrawlReport::default();
        let seeds = self.seeds.clone();

        tracing::info!(
            "Starting {} crawl of {} seed(s) into {}",
            self.mode,
            seeds.len(),
            self.directory.display()
        );

        for seed in &seeds {
            self.crawl_seed(seed, &mut report).await?;
        }

        tracing::info!(
            "Crawl completed: {} pages visited, {} written, {} skipped, {} failed",
            report.pages_visited(),
            report.written().len(),
            report.skipped(),
            report.failures().len()
        );

        Ok(report)
    }

    /// Drives one seed through its stages
    async fn crawl_seed(
        &mut self,
        seed: &str,
        report: &mut CrawlReport,
    ) -> Result<(), HarvestError> {
        self.stage = CrawlStage::FetchSeed;
        let seed_url = Url::parse(seed)?;

        tracing::info!("Processing {} ({} mode)", seed, self.mode);

        let Some(markup) = self.fetcher.fetch(seed).await.into_markup() else {
            tracing::warn!("Seed page {} is unavailable", seed);
            report.record(seed, PageOutcome::Unavailable);
            return self.advance(CrawlStage::Done);
        };

        match self.mode {
            CrawlMode::SinglePage => {
                self.advance(CrawlStage::ProcessPages)?;
                let outcome = self.convert_and_write(seed, &markup);
                report.record(seed, outcome);
            }
            CrawlMode::Full => {
                self.advance(CrawlStage::ExtractLinks)?;
                let links = extract_links(&markup, &seed_url);
                let found = links.len();
                let links = filter_links(links, &self.policy);
                tracing::info!(
                    "Found {} links on {}, {} pass the domain policy",
                    found,
                    seed,
                    links.len()
                );

                self.advance(CrawlStage::ProcessPages)?;
                let this = &*self;
                let outcomes: Vec<(String, PageOutcome)> = stream::iter(links)
                    .map(|link| async move {
                        let outcome = this.process_page(&link.url).await;
                        (link.url, outcome)
                    })
                    .buffer_unordered(this.max_concurrent_pages)
                    .collect()
                    .await;

                for (url, outcome) in outcomes {
                    report.record(url, outcome);
                }
            }
        }

        self.advance(CrawlStage::Done)
    }

    /// Fetches one linked page and hands it to the converter
    async fn process_page(&self, url: &str) -> PageOutcome {
        match self.fetcher.fetch(url).await.into_markup() {
            Some(markup) => self.convert_and_write(url, &markup),
            None => {
                tracing::warn!("Page {} was not received, skipping", url);
                PageOutcome::Unavailable
            }
        }
    }

    /// Converts fetched markup and writes the resulting page file
    fn convert_and_write(&self, url: &str, markup: &str) -> PageOutcome {
        let artifact = match transform_page(markup, &self.spec, &self.index_file) {
            Ok(Some(artifact)) => artifact,
            Ok(None) => {
                tracing::warn!("Content of page {} is empty, no file created", url);
                return PageOutcome::Empty;
            }
            Err(e) => {
                tracing::warn!("Failed to convert {}: {}", url, e);
                return PageOutcome::ConversionFailed(e.to_string());
            }
        };

        tracing::info!("Processing page: {} ({})", artifact.sanitized_name, url);

        match write_page(&self.directory, &artifact) {
            Ok(path) => PageOutcome::Written(path),
            Err(e) => {
                tracing::error!("Failed to write page {}: {}", url, e);
                PageOutcome::WriteFailed(e.to_string())
            }
        }
    }

    fn advance(&mut self, next: CrawlStage) -> Result<(), HarvestError> {
        if !self.stage.can_transition_to(next, self.mode) {
            return Err(HarvestError::InvalidTransition {
                from: self.stage,
                to: next,
            });
        }
        tracing::debug!("Crawl stage {} -> {}", self.stage, next);
        self.stage = next;
        Ok(())
    }
}
