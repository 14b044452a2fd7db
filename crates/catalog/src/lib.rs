//! # Catalog Crate
//!
//! This crate holds the e-book catalog that the search filter runs over.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (CatalogItem, Section, CatalogIndex)
//! - **parser**: Parse the backend's JSON payloads into Rust structs
//! - **index**: Load a catalog directory and check its integrity
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use ebookery_catalog::CatalogIndex;
//! use std::path::Path;
//!
//! let mut index = CatalogIndex::load_from_dir(Path::new("data/catalog"))?;
//!
//! // After the librarian edits a record, patch it in place
//! index.upsert_item(edited);
//!
//! for item in index.items() {
//!     println!("{} by {}", item.title, item.author_names.join(", "));
//! }
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{CatalogError, Result};
pub use types::{
    // Type aliases
    ItemId,
    SectionId,
    // Core types
    CatalogItem,
    CatalogIndex,
    Section,
    SectionRef,
};
