//! Version extraction from marker file text

use std::sync::LazyLock;

use regex::Regex;

/// `$wp_version = '6.4.2'` or `$wp_version = "6.4.2"`, with optional
/// whitespace around the `=`.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\$wp_version\s*=\s*['"]([^'"]*)['"]"#).expect("VERSION_PATTERN regex is invalid")
});

/// Extract the version string from marker file contents.
///
/// The file is scanned as plain text and never evaluated as PHP — the
/// marker file belongs to the scanned installation and may require a
/// runtime this tool does not have. Returns the first match's captured
/// value, or an empty string when no assignment is present.
pub fn extract_version(contents: &str) -> String {
    VERSION_PATTERN
        .captures(contents)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
