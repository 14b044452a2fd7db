//! Catalog search filtering for eBookery.
//!
//! This crate provides:
//! - SearchCriteria and the per-field set/clear operations
//! - Filter trait and one implementation per search field
//! - FilterPipeline for composing filters
//! - `apply`, the pure function from (items, criteria) to the visible view
//!
//! ## Architecture
//! Nothing here holds state between calls. The caller owns the current
//! collection and the current criteria, and calls `apply` again whenever
//! either changes:
//! 1. A keystroke becomes `set_criteria_field` / `clear_criteria_field`
//! 2. The new criteria are compiled into a FilterPipeline (one filter per
//!    non-empty field)
//! 3. The pipeline narrows the collection, keeping source order
//!
//! ## Example Usage
//! ```ignore
//! use ebookery_filter::{apply, set_criteria_field, SearchCriteria};
//!
//! let criteria = set_criteria_field(&SearchCriteria::new(), "authorNames", "jane")?;
//! let visible = apply(index.items(), &criteria);
//! ```

pub mod catalog_filter;
pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use catalog_filter::{CatalogFilter, FilteredView, apply};
pub use criteria::{
    InvalidFieldError, SearchCriteria, SearchField, clear_criteria_field, set_criteria_field,
};
pub use filter_pipeline::FilterPipeline;
pub use traits::Filter;
