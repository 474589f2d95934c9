/// Characters that are not allowed in file names on common filesystems
const RESERVED_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replaces every reserved file name character with `_`
///
/// All other characters, including non-ASCII text, are kept as they are.
///
/// # Examples
///
/// ```
/// use markdown_harvester::output::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Q&A: what/why?"), "Q&A_ what_why_");
/// assert_eq!(sanitize_filename("Документация"), "Документация");
/// assert_eq!(sanitize_filename(""), "");
/// ```
pub fn sanitize_filename(text: &str) -> String {
    text.chars()
        .map(|c| if RESERVED_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_every_reserved_char() {
        assert_eq!(sanitize_filename(r#"<>:"/\|?*"#), "_________");
    }

    #[test]
    fn test_output_has_no_reserved_chars() {
        let inputs = [
            "Title: Subtitle",
            "a/b\\c",
            "\"quoted\" <tag>",
            "what? *really*|no",
            "plain text",
        ];
        for input in inputs {
            let out = sanitize_filename(input);
            assert!(
                !out.contains(RESERVED_CHARS),
                "{:?} still has reserved chars",
                out
            );
        }
    }

    #[test]
    fn test_clean_string_unchanged() {
        assert_eq!(sanitize_filename("Getting Started"), "Getting Started");
    }

    #[test]
    fn test_idempotent() {
        let once = sanitize_filename("a:b/c?d");
        assert_eq!(sanitize_filename(&once), once);
    }

    #[test]
    fn test_unicode_preserved() {
        assert_eq!(sanitize_filename("Résumé — 履歴書"), "Résumé — 履歴書");
        assert_eq!(sanitize_filename("Статья: часть 1"), "Статья_ часть 1");
    }

    #[test]
    fn test_empty() {
        assert_eq!(sanitize_filename(""), "");
    }

    #[test]
    fn test_length_in_chars_preserved() {
        let input = "x<y>z";
        assert_eq!(
            sanitize_filename(input).chars().count(),
            input.chars().count()
        );
    }
}
