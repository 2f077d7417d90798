//! Slug derivation for content routing.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Derive a URL-safe slug from a name.
///
/// Decomposes to NFKD and drops combining marks (so "Résumé" → "resume"),
/// lowercases, and collapses every run of non-alphanumeric characters into a
/// single hyphen. Already-safe names pass through unchanged.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.nfkd().filter(|c| !is_combining_mark(*c)) {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
