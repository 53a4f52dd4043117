//! Slug ids for market records.

use alloc::string::String;

/// Longest slug the dataset allows, in characters.
pub const MAX_SLUG_CHARS: usize = 120;

/// Build a URL-safe id from a market name.
///
/// Lowercases the name, keeps letters and digits, collapses every run of
/// whitespace, underscores and hyphens into one `-`, and drops the rest.
/// The result is capped at [`MAX_SLUG_CHARS`] characters, dropping any
/// hyphen the cap leaves at the end. A name with nothing usable in it
/// becomes `"unknown"`.
///
/// # Example
///
/// ```rust
/// use pasar_malam_seed::slugify;
///
/// assert_eq!(
///     slugify("Pasar Malam Taman Connaught (Thursday)"),
///     "pasar-malam-taman-connaught-thursday"
/// );
/// assert_eq!(slugify("  "), "unknown");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    for ch in name.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if (ch.is_whitespace() || ch == '_' || ch == '-')
            && !slug.is_empty()
            && !slug.ends_with('-')
        {
            slug.push('-');
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        return String::from("unknown");
    }
    if let Some((at, _)) = slug.char_indices().nth(MAX_SLUG_CHARS) {
        slug.truncate(at);
        let end = slug.trim_end_matches('-').len();
        slug.truncate(end);
    }
    slug
}
