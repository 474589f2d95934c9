//! DOM pruning
//!
//! Operates on scraper's owned document tree. Removed elements are detached
//! from the tree together with their descendants, so nothing rendered later
//! can see them.

use ego_tree::NodeId;
use scraper::{Html, Node, Selector};

/// Page name used when a document has no usable `<title>`
pub const UNNAMED_PAGE: &str = "Unnamed_Page";

/// Detaches every element whose `class` attribute equals one of `classes`
///
/// The comparison is on the whole attribute value (whitespace between class
/// names is normalized), so `"nav-link"` removes `<a class="nav-link">` but not
/// `<a class="nav-link active">`.
///
/// # Returns
///
/// The number of elements detached.
pub fn prune_classes(document: &mut Html, classes: &[String]) -> usize {
    if classes.is_empty() {
        return 0;
    }

    let doomed: Vec<NodeId> = document
        .tree
        .root()
        .descendants()
        .filter(|node| match node.value() {
            Node::Element(element) => element
                .attr("class")
                .is_some_and(|value| class_matches(value, classes)),
            _ => false,
        })
        .map(|node| node.id())
        .collect();

    for id in &doomed {
        if let Some(mut node) = document.tree.get_mut(*id) {
            node.detach();
        }
    }

    doomed.len()
}

fn class_matches(value: &str, classes: &[String]) -> bool {
    classes
        .iter()
        .any(|class| value.split_whitespace().eq(class.split_whitespace()))
}

/// Returns the trimmed text of the first `<title>`, or [`UNNAMED_PAGE`]
pub fn page_name(document: &Html) -> String {
    extract_title(document).unwrap_or_else(|| UNNAMED_PAGE.to_string())
}

fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}
