//! Window configuration

use serde::{Deserialize, Serialize};

use super::errors::{QueryError, QueryResult};

/// Active window configuration: the positions `[offset, length)` of the
/// filtered sequence, where `length` is an exclusive end bound rather than a
/// count. A query holds at most one; configuring another replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    /// Inclusive start position
    pub offset: usize,
    /// Exclusive end bound
    pub length: usize,
}

impl WindowSpec {
    /// Creates a window specification
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Validates the bounds against the record count of the original
    /// collection.
    ///
    /// Runs once, when the window is accepted. The bound is the original
    /// collection's count even though the slice later applies to the filtered
    /// survivors; criteria that shrink the survivors below `length` produce a
    /// shorter or empty result instead of an error.
    pub fn validate(&self, record_count: usize) -> QueryResult<()> {
        if self.offset > self.length {
            return Err(QueryError::InvalidWindow(format!(
                "offset {} must not exceed length {}",
                self.offset, self.length
            )));
        }
        if self.length > record_count {
            return Err(QueryError::InvalidWindow(format!(
                "length {} must not exceed the collection record count {}",
                self.length, record_count
            )));
        }
        Ok(())
    }

    /// True when the window selects nothing
    pub fn is_empty(&self) -> bool {
        self.offset == self.length
    }
}
