//! Stable record ordering

use std::cmp::Ordering;

use crate::query::{SortDirection, SortSpec};
use crate::record::{FieldValue, Record};

/// Orders records by the configured sort key
pub struct RecordSorter;

impl RecordSorter {
    /// Applies the sort specification, if any.
    ///
    /// The sort is stable: records whose sort keys compare equal keep their
    /// incoming relative order. Records missing the sort key order before any
    /// present value ascending, after every present value descending. With no
    /// specification the input passes through unchanged.
    pub fn sort<'a>(mut records: Vec<&'a Record>, spec: Option<&SortSpec>) -> Vec<&'a Record> {
        let spec = match spec {
            Some(spec) => spec,
            None => return records,
        };
        records.sort_by(|a, b| {
            let ordering = compare_values(a.get(&spec.key), b.get(&spec.key));
            match spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        records
    }
}

/// Total order over optional field values: absent, then null, bool, numbers,
/// strings, arrays. Integers and floats share the number rank and compare
/// numerically.
fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => {
            let rank_a = type_rank(a);
            let rank_b = type_rank(b);
            if rank_a != rank_b {
                return rank_a.cmp(&rank_b);
            }
            match (a, b) {
                (FieldValue::Bool(x), FieldValue::Bool(y)) => x.cmp(y),
                (FieldValue::Int(x), FieldValue::Int(y)) => x.cmp(y),
                (FieldValue::Int(x), FieldValue::Float(y)) => (*x as f64).total_cmp(y),
                (FieldValue::Float(x), FieldValue::Int(y)) => x.total_cmp(&(*y as f64)),
                (FieldValue::Float(x), FieldValue::Float(y)) => x.total_cmp(y),
                (FieldValue::Str(x), FieldValue::Str(y)) => x.cmp(y),
                (FieldValue::Array(x), FieldValue::Array(y)) => compare_arrays(x, y),
                // Nulls, and nothing else, share a rank without a payload.
                _ => Ordering::Equal,
            }
        }
    }
}

fn type_rank(value: &FieldValue) -> u8 {
    match value {
        FieldValue::Null => 0,
        FieldValue::Bool(_) => 1,
        FieldValue::Int(_) | FieldValue::Float(_) => 2,
        FieldValue::Str(_) => 3,
        FieldValue::Array(_) => 4,
    }
}

fn compare_arrays(a: &[FieldValue], b: &[FieldValue]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        let ordering = compare_values(Some(x), Some(y));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.len().cmp(&b.len())
}
