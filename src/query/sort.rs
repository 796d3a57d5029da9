//! Sort configuration

use serde::{Deserialize, Serialize};

/// Sort direction, parsed from the case-sensitive tokens `ASC` and `DESC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Ascending
    #[serde(rename = "ASC")]
    Asc,
    /// Descending
    #[serde(rename = "DESC")]
    Desc,
}

impl SortDirection {
    /// Parses a direction token; `None` when the token is unrecognized
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ASC" => Some(SortDirection::Asc),
            "DESC" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    /// The token this direction parses from
    pub fn as_token(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Active sort configuration: field key plus direction. A query holds at most
/// one; configuring another replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field key to order by
    pub key: String,
    /// Direction to order in
    pub direction: SortDirection,
}

impl SortSpec {
    /// Creates a sort specification
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    /// Ascending sort on the given key
    pub fn asc(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    /// Descending sort on the given key
    pub fn desc(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Desc)
    }
}
