//! URL-safe project slugs.

use chrono::{DateTime, Utc};

/// Generate a URL-safe slug from a display name.
///
/// Rules:
/// - Lowercase ASCII letters and digits are kept
/// - Everything else becomes a hyphen
/// - Consecutive hyphens collapse into one
/// - Leading/trailing hyphens are trimmed
///
/// # Examples
///
/// ```
/// use nexaforge_types::slug::slugify;
///
/// assert_eq!(slugify("Aurora Studio"), "aurora-studio");
/// assert_eq!(slugify("My  Cool  Site!"), "my-cool-site");
/// assert_eq!(slugify("Café Nova"), "caf-nova");
/// ```
pub fn slugify(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_was_hyphen = true; // treat start as hyphen to trim leading
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            prev_was_hyphen = false;
        } else if !prev_was_hyphen {
            result.push('-');
            prev_was_hyphen = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Slug identifying one generated project: the project name plus the
/// generation instant in epoch milliseconds.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use nexaforge_types::slug::project_slug;
///
/// let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
/// assert_eq!(project_slug("Aurora", at), "aurora-1700000000123");
/// ```
pub fn project_slug(project_name: &str, generated_at: DateTime<Utc>) -> String {
    slugify(&format!("{project_name}-{}", generated_at.timestamp_millis()))
}

/// True when `slug` only contains characters that survive unescaped in a URL path.
pub fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
