//! Error types for Engine Spec
//!
//! Rendering itself never fails; these errors come from building tables
//! against an explicit schema and from loading content catalogs.

use thiserror::Error;

/// Errors raised while declaring a schema or building a table against one
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Explicit schema declared without any columns
    #[error("Schema has no columns")]
    NoColumns,

    /// Two columns share a name
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// A citation column appears anywhere but last, or more than once
    #[error("Citation column must be the last column: {0}")]
    CitationNotLast(String),

    /// A record carries a key the schema does not declare
    #[error("Row {row} has unknown column: {column}")]
    UnknownColumn { row: usize, column: String },
}

/// Errors raised while loading a content catalog
#[derive(Error, Debug)]
pub enum ContentError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed catalog JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A table section failed schema validation
    #[error("Table error in page '{page}', section '{section}': {source}")]
    Table {
        page: String,
        section: String,
        #[source]
        source: TableError,
    },

    /// Two pages share a slug
    #[error("Duplicate page slug: {0}")]
    DuplicateSlug(String),

    /// No page with the requested slug
    #[error("Page not found: {0}")]
    PageNotFound(String),
}

/// Result type alias using ContentError
pub type ContentResult<T> = Result<T, ContentError>;
