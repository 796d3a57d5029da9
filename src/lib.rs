//! memquery - a strict, fail-fast query interface over in-memory records
//!
//! Configuration is validated by the call that sets it; materialization
//! cannot fail.

pub mod pipeline;
pub mod query;
pub mod record;
