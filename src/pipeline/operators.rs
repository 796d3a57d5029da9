//! Criterion operator registry
//!
//! Maps operator tokens to match predicates. The registry is immutable after
//! initialization and is consulted twice per criterion: by the builder to
//! validate the token at accumulation time, and by the matcher to fetch the
//! predicate at evaluation time.
//!
//! Matching rules:
//! - Equality is strict: values of different types are never equal.
//! - Ordering is defined for number/number and string/string pairs only;
//!   integers and floats compare numerically with each other.
//! - Substring operators are case-sensitive and require string operands.
//! - Set membership requires an array comparison value.
//! - Every other operand pairing evaluates to no match, never an error.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::record::FieldValue;

/// Match predicate, applied as `predicate(field_value, comparison_value)`
pub type MatchFn = fn(&FieldValue, &FieldValue) -> bool;

/// Operator tokens recognized by the registry
pub mod tokens {
    /// Strict equality
    pub const EQ: &str = "=";
    /// Strict inequality
    pub const NOT_EQ: &str = "!=";
    /// Greater than
    pub const GT: &str = ">";
    /// Less than
    pub const LT: &str = "<";
    /// Greater than or equal
    pub const GTE: &str = ">=";
    /// Less than or equal
    pub const LTE: &str = "<=";
    /// String contains substring
    pub const CONTAINS: &str = "CONTAINS";
    /// String starts with prefix
    pub const STARTS_WITH: &str = "STARTS_WITH";
    /// String ends with suffix
    pub const ENDS_WITH: &str = "ENDS_WITH";
    /// Field value is a member of the comparison array
    pub const IN_ARRAY: &str = "IN_ARRAY";
    /// Field value is not a member of the comparison array
    pub const NOT_IN_ARRAY: &str = "NOT_IN_ARRAY";

    /// All registered operator tokens
    pub fn all() -> &'static [&'static str] {
        &[
            EQ,
            NOT_EQ,
            GT,
            LT,
            GTE,
            LTE,
            CONTAINS,
            STARTS_WITH,
            ENDS_WITH,
            IN_ARRAY,
            NOT_IN_ARRAY,
        ]
    }
}

static REGISTRY: OnceLock<HashMap<&'static str, MatchFn>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, MatchFn> {
    REGISTRY.get_or_init(|| {
        let mut map: HashMap<&'static str, MatchFn> = HashMap::new();
        map.insert(tokens::EQ, eq_match);
        map.insert(tokens::NOT_EQ, not_eq_match);
        map.insert(tokens::GT, gt_match);
        map.insert(tokens::LT, lt_match);
        map.insert(tokens::GTE, gte_match);
        map.insert(tokens::LTE, lte_match);
        map.insert(tokens::CONTAINS, contains_match);
        map.insert(tokens::STARTS_WITH, starts_with_match);
        map.insert(tokens::ENDS_WITH, ends_with_match);
        map.insert(tokens::IN_ARRAY, in_array_match);
        map.insert(tokens::NOT_IN_ARRAY, not_in_array_match);
        map
    })
}

/// Resolves an operator token to its match predicate
pub fn resolve(token: &str) -> Option<MatchFn> {
    registry().get(token).copied()
}

/// True when the token names a registered operator
pub fn is_registered(token: &str) -> bool {
    registry().contains_key(token)
}

fn eq_match(field: &FieldValue, comparison: &FieldValue) -> bool {
    field == comparison
}

fn not_eq_match(field: &FieldValue, comparison: &FieldValue) -> bool {
    field != comparison
}

/// Ordering between comparable values. Pairs outside the number/number and
/// string/string combinations are incomparable.
fn compare(field: &FieldValue, comparison: &FieldValue) -> Option<Ordering> {
    match (field, comparison) {
        (FieldValue::Int(a), FieldValue::Int(b)) => Some(a.cmp(b)),
        (FieldValue::Int(a), FieldValue::Float(b)) => Some((*a as f64).total_cmp(b)),
        (FieldValue::Float(a), FieldValue::Int(b)) => Some(a.total_cmp(&(*b as f64))),
        (FieldValue::Float(a), FieldValue::Float(b)) => Some(a.total_cmp(b)),
        (FieldValue::Str(a), FieldValue::Str(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn gt_match(field: &FieldValue, comparison: &FieldValue) -> bool {
    matches!(compare(field, comparison), Some(Ordering::Greater))
}

fn lt_match(field: &FieldValue, comparison: &FieldValue) -> bool {
    matches!(compare(field, comparison), Some(Ordering::Less))
}

fn gte_match(field: &FieldValue, comparison: &FieldValue) -> bool {
    matches!(
        compare(field, comparison),
        Some(Ordering::Greater | Ordering::Equal)
    )
}

fn lte_match(field: &FieldValue, comparison: &FieldValue) -> bool {
    matches!(
        compare(field, comparison),
        Some(Ordering::Less | Ordering::Equal)
    )
}

fn contains_match(field: &FieldValue, comparison: &FieldValue) -> bool {
    match (field.as_str(), comparison.as_str()) {
        (Some(haystack), Some(needle)) => haystack.contains(needle),
        _ => false,
    }
}

fn starts_with_match(field: &FieldValue, comparison: &FieldValue) -> bool {
    match (field.as_str(), comparison.as_str()) {
        (Some(haystack), Some(prefix)) => haystack.starts_with(prefix),
        _ => false,
    }
}

fn ends_with_match(field: &FieldValue, comparison: &FieldValue) -> bool {
    match (field.as_str(), comparison.as_str()) {
        (Some(haystack), Some(suffix)) => haystack.ends_with(suffix),
        _ => false,
    }
}

fn in_array_match(field: &FieldValue, comparison: &FieldValue) -> bool {
    match comparison.as_array() {
        Some(items) => items.contains(field),
        None => false,
    }
}

/// A non-array comparison value never matches, same as `IN_ARRAY`; the two
/// operators are complementary only over array operands.
fn not_in_array_match(field: &FieldValue, comparison: &FieldValue) -> bool {
    match comparison.as_array() {
        Some(items) => !items.contains(field),
        None => false,
    }
}
