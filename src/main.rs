//! Markdown-Harvester main entry point
//!
//! This is the command-line interface for the Markdown-Harvester page converter.

use anyhow::Context;
use clap::Parser;
use markdown_harvester::config::{read_config, validate, HarvestConfig};
use markdown_harvester::crawler::harvest;
use markdown_harvester::output::build_index;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Markdown-Harvester: turns web pages into a linked folder of Markdown notes
///
/// Markdown-Harvester fetches each seed page, follows its direct links that
/// pass the domain policy, converts every page to cleaned Markdown and writes
/// an index file referencing all of them.
#[derive(Parser, Debug)]
#[command(name = "markdown-harvester")]
#[command(version = "1.0.0")]
#[command(about = "Converts a web page and its links into Markdown notes", long_about = None)]
struct Cli {
    /// Seed URLs to start from
    #[arg(value_name = "URL")]
    seeds: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory receiving the Markdown files
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Only follow links whose host contains this value (repeatable)
    #[arg(long = "allow", value_name = "DOMAIN")]
    allowed: Vec<String>,

    /// Skip links whose host contains this value (repeatable)
    #[arg(long = "exclude", value_name = "DOMAIN")]
    excluded: Vec<String>,

    /// Tag to omit from the Markdown (repeatable)
    #[arg(long = "strip-tag", value_name = "TAG")]
    strip_tags: Vec<String>,

    /// Class attribute value whose elements are removed (repeatable)
    #[arg(long = "strip-class", value_name = "CLASS")]
    strip_classes: Vec<String>,

    /// Convert only the seed pages, without following their links
    #[arg(long)]
    single_page: bool,

    /// Maximum number of pages processed at once
    #[arg(long, value_name = "N")]
    concurrency: Option<usize>,

    /// File name of the generated index
    #[arg(long, value_name = "NAME")]
    index_file: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the effective configuration without crawling
    #[arg(long, conflicts_with = "index_only")]
    dry_run: bool,

    /// Rebuild the index of the output directory and exit
    #[arg(long, conflicts_with = "dry_run")]
    index_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_effective_config(&cli)?;

    // Handle different modes
    if cli.index_only {
        handle_index_only(&config)?;
        return Ok(ExitCode::SUCCESS);
    }

    validate(&config).context("Invalid configuration")?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(ExitCode::SUCCESS);
    }

    handle_harvest(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("markdown_harvester=info,warn"),
            1 => EnvFilter::new("markdown_harvester=debug,info"),
            2 => EnvFilter::new("markdown_harvester=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Reads the config file if given, then layers CLI values on top
fn load_effective_config(cli: &Cli) -> anyhow::Result<HarvestConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            read_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => HarvestConfig::default(),
    };

    if !cli.seeds.is_empty() {
        config.crawl.seeds = cli.seeds.clone();
    }
    if cli.single_page {
        config.crawl.single_page = true;
    }
    if let Some(concurrency) = cli.concurrency {
        config.crawl.max_concurrent_pages = concurrency;
    }
    if !cli.allowed.is_empty() {
        config.domains.allowed = cli.allowed.clone();
    }
    if !cli.excluded.is_empty() {
        config.domains.excluded = cli.excluded.clone();
    }
    if !cli.strip_tags.is_empty() {
        config.transform.strip_tags = cli.strip_tags.clone();
    }
    if !cli.strip_classes.is_empty() {
        config.transform.strip_classes = cli.strip_classes.clone();
    }
    if let Some(output) = &cli.output {
        config.output.directory = output.clone();
    }
    if let Some(index_file) = &cli.index_file {
        config.output.index_file = index_file.clone();
    }

    config.fill_empty_with_defaults();
    Ok(config)
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &HarvestConfig) {
    println!("=== Markdown-Harvester Dry Run ===\n");

    println!("Crawl:");
    println!("  Mode: {}", config.mode());
    println!(
        "  Max concurrent pages: {}",
        config.crawl.max_concurrent_pages
    );
    println!("  Seeds ({}):", config.crawl.seeds.len());
    for seed in &config.crawl.seeds {
        println!("    * {}", seed);
    }

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory.display());
    println!("  Index file: {}", config.output.index_file);

    println!("\nAllowed Domains ({}):", config.domains.allowed.len());
    for domain in &config.domains.allowed {
        println!("  - {}", domain);
    }

    println!("\nExcluded Domains ({}):", config.domains.excluded.len());
    for domain in &config.domains.excluded {
        println!("  - {}", domain);
    }

    println!("\nStripped Tags: {}", config.transform.strip_tags.join(", "));
    println!("Stripped Classes ({}):", config.transform.strip_classes.len());
    for class in &config.transform.strip_classes {
        println!("  - {:?}", class);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the --index-only mode: rebuilds the index of an existing directory
fn handle_index_only(config: &HarvestConfig) -> anyhow::Result<()> {
    let path = build_index(&config.output.directory, &config.output.index_file)
        .context("Failed to build index")?;
    println!("✓ Index written to: {}", path.display());
    Ok(())
}

/// Handles the main harvest operation
async fn handle_harvest(config: HarvestConfig) -> anyhow::Result<ExitCode> {
    tracing::info!(
        "Seeds: {}, Allowed: {}, Excluded: {}",
        config.crawl.seeds.len(),
        config.domains.allowed.len(),
        config.domains.excluded.len()
    );

    let report = tokio::select! {
        result = harvest(config) => result.context("Harvest failed")?,
        _ = shutdown_signal() => {
            tracing::warn!("Harvest interrupted, index not rebuilt");
            return Ok(ExitCode::from(130));
        }
    };

    for (url, outcome) in report.failures() {
        tracing::error!("{}: {}", url, outcome);
    }

    if report.has_failures() {
        tracing::error!(
            "{} page(s) could not be written",
            report.failures().len()
        );
        return Ok(ExitCode::FAILURE);
    }

    tracing::info!(
        "Harvest completed: {} page(s) written",
        report.written().len()
    );
    Ok(ExitCode::SUCCESS)
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received shutdown signal");
}
