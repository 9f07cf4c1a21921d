//! Error types for the schema generator
//!
//! A declared field type with no range mapping is deliberately NOT an error
//! variant: it signals a mapping table that was not extended alongside a new
//! type, and [`resolve_range`](crate::resolve::resolve_range) aborts the
//! process instead of returning. The variants here cover the registration
//! and export surfaces, which are ordinary recoverable failures.

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Schema generator errors
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Type already registered: {name}")]
    DuplicateType { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
