/// Checks whether a host contains any of the given patterns as a substring
///
/// Matching is plain substring containment, not suffix or label matching:
/// `"google.com"` matches `"mail.google.com"` but also
/// `"notgoogle.com.evil.org"`. Domain lists rely on this looseness, so it is
/// kept as is.
///
/// # Examples
///
/// ```
/// use markdown_harvester::url::host_contains_any;
///
/// assert!(host_contains_any("mail.google.com", &["google.com"]));
/// assert!(host_contains_any("notgoogle.com.evil.org", &["google.com"]));
/// assert!(!host_contains_any("example.org", &["google.com", "t.me"]));
/// ```
pub fn host_contains_any<S: AsRef<str>>(host: &str, patterns: &[S]) -> bool {
    patterns
        .iter()
        .any(|pattern| host.contains(pattern.as_ref()))
}

/// Returns the first pattern contained in the host, if any
pub fn first_match<'a, S: AsRef<str>>(host: &str, patterns: &'a [S]) -> Option<&'a str> {
    patterns
        .iter()
        .map(|pattern| pattern.as_ref())
        .find(|pattern| host.contains(*pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_host() {
        assert!(host_contains_any("example.com", &["example.com"]));
    }

    #[test]
    fn test_subdomain_matches() {
        assert!(host_contains_any("blog.example.com", &["example.com"]));
        assert!(host_contains_any("api.v2.example.com", &["example.com"]));
    }

    #[test]
    fn test_substring_imprecision_is_kept() {
        assert!(host_contains_any("notgoogle.com.evil.org", &["google.com"]));
        assert!(host_contains_any("myexample.com", &["example.com"]));
        assert!(host_contains_any("t.me.example.org", &["t.me"]));
    }

    #[test]
    fn test_no_match() {
        assert!(!host_contains_any("example.org", &["example.com"]));
        assert!(!host_contains_any("example.com", &["github.com", "t.me"]));
    }

    #[test]
    fn test_empty_pattern_list() {
        let empty: [&str; 0] = [];
        assert!(!host_contains_any("example.com", &empty));
    }

    #[test]
    fn test_case_sensitivity() {
        // Hosts are lowercased before matching; patterns are taken as given
        assert!(!host_contains_any("example.com", &["EXAMPLE.COM"]));
    }

    #[test]
    fn test_first_match_order() {
        let patterns = vec!["example".to_string(), "example.com".to_string()];
        assert_eq!(first_match("www.example.com", &patterns), Some("example"));
        assert_eq!(first_match("other.org", &patterns), None);
    }
}
