//! The catalog search entry points.
//!
//! `apply` is the whole contract: a pure function of the item slice and the
//! criteria. `CatalogFilter` is the same thing with the pipeline built once,
//! for callers that re-run one set of criteria against several collections.

use crate::criteria::SearchCriteria;
use crate::filter_pipeline::FilterPipeline;
use ebookery_catalog::CatalogItem;

/// The items that satisfy a set of criteria, in source order
pub type FilteredView<'a> = Vec<&'a CatalogItem>;

/// Filter `items` by `criteria`.
///
/// An item is kept when every non-empty pattern matches it: title and
/// section name by case-insensitive substring, authors when any one name
/// contains the pattern. Uncategorized items fail a non-empty section
/// pattern. Never fails; an empty slice gives an empty view.
pub fn apply<'a>(items: &'a [CatalogItem], criteria: &SearchCriteria) -> FilteredView<'a> {
    CatalogFilter::new(criteria.clone()).apply(items)
}

/// A built filter for one set of criteria
pub struct CatalogFilter {
    criteria: SearchCriteria,
    pipeline: FilterPipeline,
}

impl CatalogFilter {
    pub fn new(criteria: SearchCriteria) -> Self {
        let pipeline = FilterPipeline::from_criteria(&criteria);
        Self { criteria, pipeline }
    }

    /// The criteria this filter was built from
    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// True when the filter keeps every item
    pub fn is_unconstrained(&self) -> bool {
        self.pipeline.is_empty()
    }

    /// Whether one item would be in the view
    pub fn matches(&self, item: &CatalogItem) -> bool {
        self.pipeline.matches(item)
    }

    /// Filter `items`, preserving their order
    pub fn apply<'a>(&self, items: &'a [CatalogItem]) -> FilteredView<'a> {
        self.pipeline.apply(items)
    }
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self::new(SearchCriteria::default())
    }
}
