//! Error types for the catalog crate.
//!
//! Loading a catalog can fail at three levels: the file itself (missing,
//! unreadable), the JSON document (not an array, bad syntax), or a single
//! record inside it. Index validation adds two integrity errors on top.

use thiserror::Error;

/// Errors that can occur while loading, parsing or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document is not valid JSON
    #[error("Invalid JSON in {file}: {source}")]
    JsonError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record in the document couldn't be turned into a domain value
    ///
    /// `record` is the zero-based position of the record in the top-level array
    #[error("Parse error at record {record} in {file}: {reason}")]
    ParseError {
        file: String,
        record: usize,
        reason: String,
    },

    /// Two catalog entries share the same identifier
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: String, id: String },

    /// Referenced entity doesn't exist (e.g., e-book filed under an unknown section)
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
