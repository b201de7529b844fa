//! WordPress version extraction
//!
//! A best-effort scraper over `wp-includes/version.php`, not a PHP parser.
//! The first line containing `$wp_version` wins, whatever surrounds it.

/// Extract the version literal from the content of a `version.php` file.
///
/// Scans lines in order for the first one containing the literal substring
/// `$wp_version` (case-sensitive, no word boundary). Everything after the
/// first `=` on that line is taken, whitespace-trimmed, then trimmed of any
/// mix of `'`, `"` and `;` at both ends.
///
/// Returns `None` when no line matches or the matching line carries no `=`.
/// The returned string may still be empty when trimming consumed everything;
/// callers decide whether that counts as a result.
pub fn extract_version(content: &str) -> Option<String> {
    for line in content.split('\n') {
        if !line.contains("$wp_version") {
            continue;
        }
        let (_, value) = line.split_once('=')?;
        let version = value.trim().trim_matches(|c| matches!(c, '\'' | '"' | ';'));
        return Some(version.to_string());
    }
    None
}
