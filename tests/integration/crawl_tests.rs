//! Integration tests for the harvester
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! fetch, convert, write and index cycle end-to-end.

use markdown_harvester::config::HarvestConfig;
use markdown_harvester::crawler::harvest;
use markdown_harvester::{build_index, HarvestError, OutputError, PageOutcome};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration for one seed writing into `dir`
fn create_test_config(seed: String, dir: &Path) -> HarvestConfig {
    let mut config = HarvestConfig::with_seeds([seed]);
    config.output.directory = dir.to_path_buf();
    config.user_agent.crawler_name = "TestBot".to_string();
    config
}

async fn mount_page(server: &MockServer, route: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string(html.to_string()),
        )
        .mount(server)
        .await;
}

/// Mounts a seed linking to two good pages, an empty page, a missing page
/// and a deny-listed host
async fn mount_site(server: &MockServer) {
    mount_page(
        server,
        "/",
        r#"<html><head><title>Home</title></head><body>
            <a href="/intro">Intro</a>
            <a href="/faq">FAQ</a>
            <a href="/empty">Empty</a>
            <a href="/gone">Gone</a>
            <a href="https://www.youtube.com/watch?v=1">Video</a>
        </body></html>"#,
    )
    .await;
    mount_page(
        server,
        "/intro",
        r#"<html><head><title>Introduction</title></head><body>
            <nav>Site menu</nav>
            <div class="btn">Subscribe</div>
            <h1>Introduction</h1>
            <p>Getting started with the harvester.</p>
        </body></html>"#,
    )
    .await;
    mount_page(
        server,
        "/faq",
        r#"<html><head><title>FAQ: What/Why?</title></head><body>
            <p>Answers live here.</p>
        </body></html>"#,
    )
    .await;
    mount_page(
        server,
        "/empty",
        r#"<html><head><title>Nothing</title></head><body><script>track()</script></body></html>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(server)
        .await;
}

fn md_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_full_harvest_writes_pages_and_index() {
    let server = MockServer::start().await;
    mount_site(&server).await;
    let dir = TempDir::new().unwrap();

    let config = create_test_config(format!("{}/", server.uri()), dir.path());
    let report = harvest(config).await.expect("harvest should succeed");

    assert!(!report.has_failures());
    assert_eq!(
        md_files(dir.path()),
        vec![
            "FAQ_ What_Why_.md".to_string(),
            "INDEX.md".to_string(),
            "Introduction.md".to_string(),
        ]
    );

    let intro = fs::read_to_string(dir.path().join("Introduction.md")).unwrap();
    assert!(intro.contains("Getting started with the harvester."));
    assert!(!intro.contains("Introduction"));
    assert!(intro.contains("Site menu"));
    assert!(!intro.contains("Subscribe"));
    assert!(intro.ends_with("\n\n[[INDEX.md]]"));

    let index = fs::read_to_string(dir.path().join("INDEX.md")).unwrap();
    assert!(index.starts_with("# Files in folder "));
    assert!(index.contains("[[Introduction.md]]"));
    assert!(index.contains("[[FAQ_ What_Why_.md]]"));
    assert!(!index.contains("[[INDEX.md]]"));
}

#[tokio::test]
async fn test_skipped_pages_are_reported() {
    let server = MockServer::start().await;
    mount_site(&server).await;
    let dir = TempDir::new().unwrap();
    let base = server.uri();

    let config = create_test_config(format!("{}/", base), dir.path());
    let report = harvest(config).await.unwrap();

    assert_eq!(
        report.outcome_for(&format!("{}/gone", base)),
        Some(&PageOutcome::Unavailable)
    );
    assert_eq!(
        report.outcome_for(&format!("{}/empty", base)),
        Some(&PageOutcome::Empty)
    );
    assert!(report
        .outcome_for("https://www.youtube.com/watch?v=1")
        .is_none());
    assert!(!dir.path().join("Nothing.md").exists());
}

#[tokio::test]
async fn test_single_page_harvest() {
    let server = MockServer::start().await;
    mount_site(&server).await;
    let dir = TempDir::new().unwrap();

    let mut config = create_test_config(format!("{}/intro", server.uri()), dir.path());
    config.crawl.single_page = true;
    let report = harvest(config).await.unwrap();

    assert_eq!(report.pages_visited(), 1);
    assert_eq!(
        md_files(dir.path()),
        vec!["INDEX.md".to_string(), "Introduction.md".to_string()]
    );
}

#[tokio::test]
async fn test_allow_list_keeps_only_matching_hosts() {
    let server = MockServer::start().await;
    mount_site(&server).await;
    let dir = TempDir::new().unwrap();

    let mut config = create_test_config(format!("{}/", server.uri()), dir.path());
    config.domains.allowed = vec!["example.org".to_string()];
    let report = harvest(config).await.unwrap();

    assert_eq!(report.pages_visited(), 0);
    assert_eq!(md_files(dir.path()), vec!["INDEX.md".to_string()]);
}

#[tokio::test]
async fn test_unavailable_seed_still_builds_index() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    let config = create_test_config(format!("{}/", server.uri()), dir.path());
    let report = harvest(config).await.unwrap();

    assert_eq!(report.written().len(), 0);
    let index = fs::read_to_string(dir.path().join("INDEX.md")).unwrap();
    assert!(!index.contains("[["));
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config("not a url".to_string(), dir.path());

    let result = harvest(config).await;

    assert!(matches!(result, Err(HarvestError::Config(_))));
    assert!(md_files(dir.path()).is_empty());
}

#[tokio::test]
async fn test_repeat_harvest_gives_same_index() {
    let server = MockServer::start().await;
    mount_site(&server).await;
    let dir = TempDir::new().unwrap();
    let seed = format!("{}/", server.uri());

    harvest(create_test_config(seed.clone(), dir.path()))
        .await
        .unwrap();
    let first = fs::read_to_string(dir.path().join("INDEX.md")).unwrap();

    harvest(create_test_config(seed, dir.path())).await.unwrap();
    let second = fs::read_to_string(dir.path().join("INDEX.md")).unwrap();

    let mut first_lines: Vec<_> = first.lines().map(|l| l.split_once(". ").map(|p| p.1)).collect();
    let mut second_lines: Vec<_> = second.lines().map(|l| l.split_once(". ").map(|p| p.1)).collect();
    first_lines.sort();
    second_lines.sort();
    assert_eq!(first_lines, second_lines);
}

#[test]
fn test_index_of_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    let result = build_index(&missing, "INDEX.md");

    match result {
        Err(OutputError::DirectoryNotFound { path }) => assert_eq!(path, missing),
        other => panic!("unexpected result: {:?}", other),
    }
}
