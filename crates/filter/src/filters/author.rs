//! Filter on the e-book's authors.

use super::{contains_folded, fold};
use crate::traits::Filter;
use ebookery_catalog::CatalogItem;

/// Keeps items where at least one author name contains the pattern,
/// ignoring case.
///
/// The pattern is matched against each name separately, never against the
/// joined list, so "Doe, Jane" does not match an item by "John Doe" and
/// "Jane Smith".
pub struct AuthorFilter {
    pattern: String,
}

impl AuthorFilter {
    /// Create a new AuthorFilter
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: fold(pattern),
        }
    }
}

impl Filter for AuthorFilter {
    fn name(&self) -> &str {
        "AuthorFilter"
    }

    fn matches(&self, item: &CatalogItem) -> bool {
        item.author_names
            .iter()
            .any(|author| contains_folded(author, &self.pattern))
    }
}
