//! String normalization shared by the matcher and the corpus tooling.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize text for matching: lowercase, strip diacritics, collapse whitespace.
///
/// Both queries and field text pass through this before any scoring happens,
/// so "Café Setup" and "cafe setup" land on the same string. Help-center
/// content is edited prose with inconsistent casing and the occasional
/// accented product name; queries are typed in a hurry. Normalizing both
/// sides keeps the edit-distance budget for real typos instead of case and
/// accent noise.
///
/// With the `unicode-normalization` feature (default):
///
/// 1. NFD decompose (base characters + combining marks)
/// 2. Drop combining marks
/// 3. Lowercase
/// 4. Collapse runs of whitespace to single spaces, trim ends
///
/// Without the feature only steps 3-4 run, which is fine for ASCII corpora.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase-and-collapse fallback when diacritic stripping is compiled out.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Is this a combining mark (category Mn) left behind by NFD decomposition?
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(normalize("  Quick   Start\tGuide "), "quick start guide");
    }

    #[test]
    fn empty_and_whitespace_only_normalize_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n  "), "");
    }

    #[cfg(feature = "unicode-normalization")]
    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("Café"), "cafe");
        assert_eq!(normalize("naïve résumé"), "naive resume");
    }
}
