//! Content transformation: fetched HTML in, cleaned Markdown out
//!
//! The transformation works in two strictly ordered passes over one owned
//! document. Pruning mutates the tree first; only the pruned tree is rendered.
//!
//! 1. Detach elements whose class attribute matches a strip class
//! 2. Take the page name from `<title>`
//! 3. Render `<body>` to Markdown, dropping the strip tags' own formatting
//! 4. Drop the page name from the text, collapse blank lines
//! 5. Append a back-reference to the index file

mod markdown;
mod prune;

pub use markdown::{collapse_blank_lines, remove_title, render_markdown};
pub use prune::{page_name, prune_classes, UNNAMED_PAGE};

use crate::config::defaults::{to_owned_list, DEFAULT_STRIP_CLASSES, DEFAULT_STRIP_TAGS};
use crate::output::sanitize_filename;
use scraper::Html;
use thiserror::Error;

/// Errors raised while transforming a page
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Markdown conversion failed: {0}")]
    Conversion(String),
}

/// What to remove from a page before and during conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformSpec {
    /// Tags the Markdown converter omits
    pub strip_tags: Vec<String>,

    /// Full class attribute values whose elements are pruned first
    pub strip_classes: Vec<String>,
}

impl TransformSpec {
    pub fn new(strip_tags: Vec<String>, strip_classes: Vec<String>) -> Self {
        Self {
            strip_tags,
            strip_classes,
        }
    }
}

impl Default for TransformSpec {
    fn default() -> Self {
        Self::new(
            to_owned_list(DEFAULT_STRIP_TAGS),
            to_owned_list(DEFAULT_STRIP_CLASSES),
        )
    }
}

/// One converted page, ready to be written as `<sanitized_name>.md`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageArtifact {
    pub sanitized_name: String,
    pub markdown_body: String,
}

/// Converts a fetched page into a [`PageArtifact`]
///
/// # Arguments
///
/// * `markup` - Raw HTML of the page
/// * `spec` - Tags and classes to strip
/// * `index_file` - Name of the index file referenced in the page footer
///
/// # Returns
///
/// * `Ok(Some(PageArtifact))` - The page produced content
/// * `Ok(None)` - Nothing but whitespace was left; no file should be written
/// * `Err(ContentError)` - Markdown conversion failed
///
/// # Example
///
/// ```
/// use markdown_harvester::content::{transform_page, TransformSpec};
///
/// let html = r#"<html><head><title>Intro</title></head>
///     <body><div class="ad">Buy now</div><p>Welcome</p></body></html>"#;
/// let spec = TransformSpec::new(vec![], vec!["ad".to_string()]);
///
/// let artifact = transform_page(html, &spec, "INDEX.md").unwrap().unwrap();
/// assert_eq!(artifact.sanitized_name, "Intro");
/// assert!(artifact.markdown_body.contains("Welcome"));
/// assert!(!artifact.markdown_body.contains("Buy now"));
/// assert!(artifact.markdown_body.ends_with("[[INDEX.md]]"));
/// ```
pub fn transform_page(
    markup: &str,
    spec: &TransformSpec,
    index_file: &str,
) -> Result<Option<PageArtifact>, ContentError> {
    let mut document = Html::parse_document(markup);

    let pruned = prune_classes(&mut document, &spec.strip_classes);
    if pruned > 0 {
        tracing::debug!("Pruned {} elements by class", pruned);
    }

    let name = page_name(&document);
    let sanitized_name = sanitize_filename(&name);

    let converted = render_markdown(&document, &spec.strip_tags)?;
    let body = collapse_blank_lines(&remove_title(&converted, &name));

    if body.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(PageArtifact {
        sanitized_name,
        markdown_body: format!("{}\n\n[[{}]]", body, index_file),
    }))
}
