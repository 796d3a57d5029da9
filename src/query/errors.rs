//! Query configuration errors
//!
//! Every failure is raised synchronously by the configuration call that
//! caused it, before the bad state is stored; terminal calls cannot fail.

use thiserror::Error;

/// Result type for query configuration
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while configuring a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The input collection held no records
    #[error("empty collection: a query needs at least one record")]
    EmptyCollection,

    /// The criterion operator token is not registered
    #[error("'{0}' is not a valid criterion operator")]
    InvalidCriterionOperator(String),

    /// The sort direction token is not recognized
    #[error("'{0}' is not a valid sort direction")]
    InvalidSortDirection(String),

    /// The window bounds are out of range
    #[error("invalid window: {0}")]
    InvalidWindow(String),
}

impl QueryError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::EmptyCollection => "MEMQ_EMPTY_COLLECTION",
            QueryError::InvalidCriterionOperator(_) => "MEMQ_INVALID_CRITERION_OPERATOR",
            QueryError::InvalidSortDirection(_) => "MEMQ_INVALID_SORT_DIRECTION",
            QueryError::InvalidWindow(_) => "MEMQ_INVALID_WINDOW",
        }
    }
}
