//! Filter implementations for the catalog search.
//!
//! One filter per search field. Each folds its pattern once at
//! construction and compares against the folded item text with a plain
//! substring check.

pub mod author;
pub mod section;
pub mod title;

// Re-export for convenience
pub use author::AuthorFilter;
pub use section::SectionFilter;
pub use title::TitleFilter;

/// Case-fold text the same way for patterns and item fields.
///
/// Plain Unicode lower-casing; no locale rules, no normalization.
pub(crate) fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Whether `haystack`, folded, contains the already-folded `needle`
pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_folded() {
        assert!(contains_folded("React for Beginners", "react"));
        assert!(contains_folded("React for Beginners", "FOR B".to_lowercase().as_str()));
        assert!(contains_folded("anything", ""));
        assert!(!contains_folded("Cooking 101", "node"));
    }

    #[test]
    fn test_fold_is_not_locale_aware() {
        assert_eq!(fold("ÀÉÎ"), "àéî");
        assert_eq!(fold("STRASSE"), "strasse");
        // no ß <-> ss equivalence
        assert!(!contains_folded("Straße", "strasse"));
    }
}
