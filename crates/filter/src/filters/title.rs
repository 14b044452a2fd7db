//! Filter on the e-book title.

use super::{contains_folded, fold};
use crate::traits::Filter;
use ebookery_catalog::CatalogItem;

/// Keeps items whose title contains the pattern, ignoring case.
pub struct TitleFilter {
    pattern: String,
}

impl TitleFilter {
    /// Create a new TitleFilter
    ///
    /// # Arguments
    /// * `pattern` - Raw text as typed; folded here
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: fold(pattern),
        }
    }
}

impl Filter for TitleFilter {
    fn name(&self) -> &str {
        "TitleFilter"
    }

    fn matches(&self, item: &CatalogItem) -> bool {
        contains_folded(&item.title, &self.pattern)
    }
}
