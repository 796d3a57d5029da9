//! Query evaluation pipeline
//!
//! The stages a terminal call runs, in their fixed order:
//!
//! 1. Filter: successive AND-narrowing by the accumulated criteria
//! 2. Window: clamped `[offset, length)` slice of the survivors
//! 3. Sort: stable ordering by the sort key, if configured
//! 4. Project: clone the survivors into owned records
//!
//! Stages are side-effect-free and re-validate nothing; configuration was
//! checked by the builder call that accepted it.

pub mod operators;

mod matcher;
mod slicer;
mod sorter;

pub use matcher::CriterionFilter;
pub use slicer::WindowSlicer;
pub use sorter::RecordSorter;
