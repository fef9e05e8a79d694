//! Text normalisation helpers shared by the updater and image strategies.

/// Slug used when the input has no alphanumeric characters
const EMPTY_SLUG: &str = "mood";

/// Normalise text into a URL and filename safe slug.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single hyphen and trims hyphens at both ends.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}

/// Strip a case-insensitive `Mood:` prefix (whitespace allowed before the colon).
///
/// Returns the trimmed remainder, or `None` when the prefix is absent.
pub fn strip_mood_prefix(text: &str) -> Option<&str> {
    let text = text.trim_start();
    let head = text.get(..4)?;
    if !head.eq_ignore_ascii_case("mood") {
        return None;
    }

    let rest = text[4..].trim_start();
    rest.strip_prefix(':').map(str::trim)
}
