//! The FilterPipeline chains field filters.
//!
//! Every filter in the pipeline must accept an item for it to survive, so
//! the pipeline is the AND of its filters. Running them in sequence over a
//! shrinking list keeps source order intact.

use crate::criteria::{SearchCriteria, SearchField};
use crate::filters::{AuthorFilter, SectionFilter, TitleFilter};
use crate::traits::Filter;
use ebookery_catalog::CatalogItem;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TitleFilter::new("react"))
///     .add_filter(AuthorFilter::new("doe"));
///
/// let visible = pipeline.apply(index.items());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a set of criteria.
    ///
    /// Empty patterns place no constraint and get no filter.
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        criteria
            .active_fields()
            .into_iter()
            .fold(Self::new(), |pipeline, field| {
                let pattern = criteria.get(field);
                match field {
                    SearchField::Title => pipeline.add_filter(TitleFilter::new(pattern)),
                    SearchField::AuthorNames => pipeline.add_filter(AuthorFilter::new(pattern)),
                    SearchField::SectionName => pipeline.add_filter(SectionFilter::new(pattern)),
                }
            })
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether a single item passes every filter
    pub fn matches(&self, item: &CatalogItem) -> bool {
        self.filters.iter().all(|filter| filter.matches(item))
    }

    /// Apply all filters in sequence to the items.
    ///
    /// Returns borrowed items in their original relative order.
    pub fn apply<'a>(&self, items: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
        let mut current: Vec<&'a CatalogItem> = items.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
