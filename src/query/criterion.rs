//! Filter criterion

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pipeline::operators::tokens;
use crate::record::FieldValue;

/// One filter condition: field key, comparison value, operator token.
///
/// Criteria accumulate on a query and combine as logical AND, applied in
/// accumulation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    /// Field key the criterion reads
    pub key: String,
    /// Value the field is compared against
    pub value: FieldValue,
    /// Operator token; strict equality when omitted
    #[serde(default = "default_operator")]
    pub operator: String,
}

fn default_operator() -> String {
    tokens::EQ.to_string()
}

impl Criterion {
    /// Creates a criterion with an explicit operator token
    pub fn new(
        key: impl Into<String>,
        value: impl Into<FieldValue>,
        operator: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            operator: operator.into(),
        }
    }

    /// Creates a strict-equality criterion
    pub fn equals(key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::new(key, value, tokens::EQ)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.key, self.operator, self.value)
    }
}
