//! Query configuration and orchestration
//!
//! [`QueryBuilder`] is the entry point: it owns a collection, accumulates
//! validated configuration through chainable calls, and materializes results
//! through [`QueryBuilder::get_results`] and [`QueryBuilder::get_count`].
//! [`QueryDefinition`] is the same configuration as serializable data.

mod builder;
mod criterion;
mod definition;
mod errors;
mod explain;
mod sort;
mod window;

pub use builder::QueryBuilder;
pub use criterion::Criterion;
pub use definition::QueryDefinition;
pub use errors::{QueryError, QueryResult};
pub use explain::{PlanStage, QueryExplain, StageKind};
pub use sort::{SortDirection, SortSpec};
pub use window::WindowSpec;
