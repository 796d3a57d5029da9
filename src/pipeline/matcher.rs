//! Criterion matching against single records

use crate::query::{Criterion, QueryError, QueryResult};
use crate::record::{FieldValue, Record};

use super::operators;

/// Evaluates one criterion against one record
pub struct CriterionFilter;

impl CriterionFilter {
    /// Checks whether a record satisfies a criterion.
    ///
    /// A record missing the criterion's key is matched as if the field held
    /// `FieldValue::Null`. The only failure is an operator token the registry
    /// does not know, which the builder rules out at accumulation time.
    pub fn matches(criterion: &Criterion, record: &Record) -> QueryResult<bool> {
        let predicate = operators::resolve(&criterion.operator)
            .ok_or_else(|| QueryError::InvalidCriterionOperator(criterion.operator.clone()))?;
        let absent = FieldValue::Null;
        let field_value = record.get(&criterion.key).unwrap_or(&absent);
        Ok(predicate(field_value, &criterion.value))
    }
}
