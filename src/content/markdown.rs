//! HTML to Markdown conversion and text cleanup

use crate::content::ContentError;
use htmd::{Element, HtmlToMarkdown};
use scraper::{Html, Selector};

/// Strip tags whose text is never prose and is dropped outright
const SILENT_TAGS: &[&str] = &["script", "style"];

/// Renders the document's `<body>` (or the whole document without one) to Markdown
///
/// Tags listed in `strip_tags` lose their own Markdown formatting but keep
/// their converted content, so `<nav>Menu</nav>` renders as `Menu`. Stripped
/// `script` and `style` elements are dropped with their content.
pub fn render_markdown(document: &Html, strip_tags: &[String]) -> Result<String, ContentError> {
    let html = body_html(document);

    let (silent, unwrapped): (Vec<&str>, Vec<&str>) = strip_tags
        .iter()
        .map(String::as_str)
        .partition(|tag| SILENT_TAGS.contains(tag));

    // htmd rejects handlers registered for an empty tag list
    let mut builder = HtmlToMarkdown::builder();
    if !unwrapped.is_empty() {
        builder = builder.add_handler(unwrapped, keep_content);
    }
    if !silent.is_empty() {
        builder = builder.skip_tags(silent);
    }

    builder
        .build()
        .convert(&html)
        .map_err(|e| ContentError::Conversion(e.to_string()))
}

fn keep_content(element: Element) -> Option<String> {
    Some(element.content.to_string())
}

fn body_html(document: &Html) -> String {
    Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next().map(|body| body.html()))
        .unwrap_or_else(|| document.html())
}

/// Removes every literal occurrence of `title` from `text`
pub fn remove_title(text: &str, title: &str) -> String {
    if title.is_empty() {
        return text.to_string();
    }
    text.replace(title, "")
}

/// Collapses runs of blank lines into one and trims blank lines at both ends
///
/// A line counts as blank when it holds nothing but whitespace.
///
/// # Example
///
/// ```
/// use markdown_harvester::content::collapse_blank_lines;
///
/// assert_eq!(collapse_blank_lines("a\n\n\n\nb\n \n\t\nc\n"), "a\n\nb\n\nc");
/// ```
pub fn collapse_blank_lines(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut previous_blank = true;

    for line in text.lines() {
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        lines.push(if blank { "" } else { line });
        previous_blank = blank;
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_paragraph() {
        let doc = Html::parse_document("<html><body><p>Hello world</p></body></html>");
        let md = render_markdown(&doc, &[]).unwrap();
        assert_eq!(md.trim(), "Hello world");
    }

    #[test]
    fn test_render_heading_and_link() {
        let doc = Html::parse_document(
            r#"<body><h1>Docs</h1><p>See <a href="https://example.com/">the site</a>.</p></body>"#,
        );
        let md = render_markdown(&doc, &[]).unwrap();
        assert!(md.contains("Docs"));
        assert!(md.contains("[the site](https://example.com/)"));
    }

    #[test]
    fn test_strip_tags_keep_their_text() {
        let doc = Html::parse_document(
            "<body><nav>Site menu</nav><footer>Contact us</footer><label>Name</label><p>Body</p></body>",
        );
        let md = render_markdown(&doc, &tags(&["nav", "footer", "label"])).unwrap();
        assert!(md.contains("Site menu"));
        assert!(md.contains("Contact us"));
        assert!(md.contains("Name"));
        assert!(md.contains("Body"));
    }

    #[test]
    fn test_strip_tags_drop_formatting() {
        let doc = Html::parse_document(
            r#"<body><p>Go <a href="https://example.com/x">there</a> <img src="x.png" alt="pic"></p></body>"#,
        );
        let md = render_markdown(&doc, &tags(&["a", "img"])).unwrap();
        assert!(md.contains("Go there"));
        assert!(!md.contains("https://example.com/x"));
        assert!(!md.contains("x.png"));
    }

    #[test]
    fn test_script_and_style_dropped_with_content() {
        let doc = Html::parse_document(
            "<body><p>Text</p><script>var secret = 1;</script><style>p { color: red }</style></body>",
        );
        let md = render_markdown(&doc, &tags(&["script", "style"])).unwrap();
        assert!(md.contains("Text"));
        assert!(!md.contains("secret"));
        assert!(!md.contains("color"));
    }

    #[test]
    fn test_empty_strip_list() {
        let doc = Html::parse_document("<body><nav>Menu</nav></body>");
        let md = render_markdown(&doc, &[]).unwrap();
        assert_eq!(md.trim(), "Menu");
    }

    #[test]
    fn test_head_is_not_rendered() {
        let doc = Html::parse_document(
            "<html><head><title>Only Title</title></head><body></body></html>",
        );
        let md = render_markdown(&doc, &[]).unwrap();
        assert!(md.trim().is_empty());
    }

    #[test]
    fn test_remove_title() {
        assert_eq!(
            remove_title("# Guide\nRead the Guide", "Guide"),
            "# \nRead the "
        );
        assert_eq!(remove_title("unchanged", ""), "unchanged");
    }

    #[test]
    fn test_collapse_keeps_single_blank_line() {
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_collapse_runs() {
        assert_eq!(collapse_blank_lines("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n  \n\t\n   \nb"), "a\n\nb");
    }

    #[test]
    fn test_collapse_trims_edges() {
        assert_eq!(collapse_blank_lines("\n\n\na\n\n\n"), "a");
        assert_eq!(collapse_blank_lines(" \n \n"), "");
    }

    #[test]
    fn test_collapse_keeps_line_content() {
        assert_eq!(collapse_blank_lines("  indented\ncode  "), "  indented\ncode  ");
    }
}
