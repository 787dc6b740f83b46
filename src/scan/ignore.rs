//! Built-in ignore fragments for branch pruning

/// Path fragments unlikely to contain a fresh install.
///
/// Matched case-insensitively as substrings of the slash-terminated path
/// relative to the scan root. The embedded separators mean a fragment only
/// hits a whole path segment (`a/themes/b`), not a partial name
/// (`my-themes-backup`).
pub const IGNORE_FRAGMENTS: &[&str] = &[
    "/wp-content/",
    "/node_modules/",
    "/.git/",
    "/.svn/",
    "/cache/",
    "/themes/",
    "/plugins/",
];

/// Return the first fragment contained in `relative`, if any.
///
/// `relative` must already carry a leading and trailing separator so
/// fragments can match at either end of the path.
pub fn matched_fragment(relative: &str) -> Option<&'static str> {
    let lower = relative.to_lowercase();
    IGNORE_FRAGMENTS
        .iter()
        .copied()
        .find(|fragment| lower.contains(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_matches_anywhere_below_root() {
        assert_eq!(
            matched_fragment("/site/node_modules/pkg/"),
            Some("/node_modules/")
        );
        assert_eq!(matched_fragment("/node_modules/"), Some("/node_modules/"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            matched_fragment("/Site/Node_Modules/pkg/"),
            Some("/node_modules/")
        );
        assert_eq!(matched_fragment("/backups/CACHE/"), Some("/cache/"));
    }

    #[test]
    fn test_partial_segment_names_do_not_match() {
        // Fragments carry separators, so a directory that merely contains
        // the word does not match.
        assert_eq!(matched_fragment("/my-themes-backup/"), None);
        assert_eq!(matched_fragment("/precache/"), None);
    }

    #[test]
    fn test_exact_segment_matches() {
        assert_eq!(matched_fragment("/a/themes/b/"), Some("/themes/"));
        assert_eq!(matched_fragment("/themes/"), Some("/themes/"));
    }

    #[test]
    fn test_root_never_matches() {
        assert_eq!(matched_fragment("/"), None);
    }

    #[test]
    fn test_first_listed_fragment_wins() {
        // Both /wp-content/ and /themes/ are present; the list order decides.
        assert_eq!(
            matched_fragment("/site/wp-content/themes/"),
            Some("/wp-content/")
        );
    }
}
