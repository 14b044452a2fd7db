//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that lets each search field be
//! checked by its own composable filter.

use ebookery_catalog::CatalogItem;

/// Core trait for filtering catalog items.
///
/// All filters must implement this trait to be used in the FilterPipeline.
/// `Send + Sync` lets a built pipeline be shared between threads.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `item` satisfies this filter
    fn matches(&self, item: &CatalogItem) -> bool;

    /// Keep the items that satisfy this filter, preserving their order.
    fn apply<'a>(&self, items: Vec<&'a CatalogItem>) -> Vec<&'a CatalogItem> {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}
