//! Record conversion errors
//!
//! Raised when turning JSON into records, before any query exists. Query
//! configuration failures live in `query::errors`.

use thiserror::Error;

/// Result type for record conversions
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors raised while converting JSON into records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A record must be a JSON object
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// A collection must be a JSON array of objects
    #[error("expected a JSON array of records, found {0}")]
    NotAnArray(&'static str),

    /// Field values are limited to the supported primitives and flat arrays
    #[error("field '{field}' holds an unsupported {found} value")]
    UnsupportedValue {
        /// Record field the offending value sits under
        field: String,
        /// JSON type name of the offending value
        found: &'static str,
    },
}
