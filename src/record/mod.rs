//! Record data model
//!
//! A collection is an ordered `Vec<Record>`; every record is a flat map from
//! field name to a strictly typed [`FieldValue`]. Conversions from JSON are
//! checked: nested objects are rejected rather than silently flattened.

mod errors;
mod record;
mod value;

pub use errors::{RecordError, RecordResult};
pub use record::{records_from_json, Record};
pub use value::FieldValue;
