//! Filter on the name of the section an e-book is filed under.

use super::{contains_folded, fold};
use crate::traits::Filter;
use ebookery_catalog::CatalogItem;

/// Keeps items whose section name contains the pattern, ignoring case.
///
/// Uncategorized items, and items whose section name is unknown, never
/// match. The pipeline only builds this filter for a non-empty pattern, so
/// such items still show up when the section field is blank.
pub struct SectionFilter {
    pattern: String,
}

impl SectionFilter {
    /// Create a new SectionFilter
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: fold(pattern),
        }
    }
}

impl Filter for SectionFilter {
    fn name(&self) -> &str {
        "SectionFilter"
    }

    fn matches(&self, item: &CatalogItem) -> bool {
        match item.section_name() {
            Some(name) => contains_folded(name, &self.pattern),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebookery_catalog::{Section, SectionRef};

    fn culinary() -> Section {
        Section {
            id: "s2".to_string(),
            name: "Culinary".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_section_filter() {
        let items = vec![
            CatalogItem::new("1", "Cooking 101", ["Alice Johnson"]).with_section(&culinary()),
            CatalogItem::new("2", "Loose", ["Nobody"]),
        ];

        let filtered = SectionFilter::new("CULIN").apply(items.iter().collect());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn test_unresolved_section_never_matches() {
        let item = CatalogItem::new("1", "Pending", ["Someone"]).with_section(SectionRef {
            id: "s9".to_string(),
            name: None,
        });

        assert!(!SectionFilter::new("s9").matches(&item));
    }
}
