// File: src/core/normalizer.rs
use crate::core::tables::ACCENT_TABLE;

/// Replaces every Vietnamese accented capital with its unaccented base letter.
/// Input is expected to be uppercased already; other characters pass through.
pub fn remove_diacritics(text: &str) -> String {
    text.chars().map(strip_accent).collect()
}

fn strip_accent(c: char) -> char {
    ACCENT_TABLE
        .iter()
        .find(|(_, variants)| variants.contains(c))
        .map(|&(base, _)| base)
        .unwrap_or(c)
}
