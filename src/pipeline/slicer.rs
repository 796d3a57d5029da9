//! Window extraction over filtered records

use crate::query::WindowSpec;
use crate::record::Record;

/// Cuts the configured window out of a record sequence
pub struct WindowSlicer;

impl WindowSlicer {
    /// Keeps the records at positions `[offset, length)`, both bounds clamped
    /// to the input length. With no window the input passes through
    /// unchanged.
    ///
    /// Bounds were checked when the window was accepted; nothing is
    /// re-validated here. An input already shorter than the window yields
    /// fewer records, and a window whose start lands past its end collapses
    /// to empty.
    pub fn slice<'a>(records: Vec<&'a Record>, window: Option<&WindowSpec>) -> Vec<&'a Record> {
        let window = match window {
            Some(window) => window,
            None => return records,
        };
        let end = window.length.min(records.len());
        let start = window.offset.min(end);
        records[start..end].to_vec()
    }
}
