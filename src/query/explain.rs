//! Read-only query explanation
//!
//! Describes what a terminal call will do without running it, for logs and
//! diagnostics.

use serde::{Deserialize, Serialize};

use super::sort::SortSpec;
use super::window::WindowSpec;

/// Pipeline stage kinds, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Criteria narrowing
    Filter,
    /// Window slice
    Window,
    /// Stable sort
    Sort,
    /// Clone into owned results
    Project,
}

impl StageKind {
    /// The stage name as it serializes
    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::Filter => "filter",
            StageKind::Window => "window",
            StageKind::Sort => "sort",
            StageKind::Project => "project",
        }
    }
}

/// One pipeline stage with a rendered description of its configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStage {
    /// Which stage this is
    pub stage: StageKind,
    /// What the stage will do under the current configuration
    pub description: String,
}

/// Explanation of a configured query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryExplain {
    /// Records in the collection the query runs over
    pub record_count: usize,
    /// Accumulated criteria, rendered in accumulation order
    pub criteria: Vec<String>,
    /// Active sort, if any
    pub sort: Option<SortSpec>,
    /// Active window, if any
    pub window: Option<WindowSpec>,
    /// The stages a terminal call will run, in order
    pub stages: Vec<PlanStage>,
}
