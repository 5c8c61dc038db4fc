//! Tag and title slugification
//!
//! Tags are authored free-form ("Rust Async", "rust-async", "RUST_ASYNC")
//! and must compare equal once slugified. Slugs are also what the
//! surrounding site uses as URL path segments, so they are restricted to
//! lowercase ASCII alphanumerics separated by single hyphens.

use regex::Regex;
use std::sync::OnceLock;

/// Regex matching runs of characters that cannot appear in a slug
fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Normalize a string into its canonical slug form.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single hyphen and trims leading/trailing hyphens. Idempotent: applying
/// it to an existing slug returns the slug unchanged. Returns an empty
/// string when the input contains no alphanumeric characters.
///
/// # Examples
///
/// ```
/// use postq::domain::slug::slugify;
///
/// assert_eq!(slugify("Rust Async"), "rust-async");
/// assert_eq!(slugify("rust-async"), "rust-async");
/// ```
pub fn slugify(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    separator_regex()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Slugify a list of tags, dropping any that normalize to the empty string.
pub fn slugify_all(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|tag| slugify(tag))
        .filter(|slug| !slug.is_empty())
        .collect()
}
