//! Fluent query builder
//!
//! Owns one fixed collection plus the accumulated configuration, validates
//! every configuration call as it is made, and runs the pipeline on demand.
//! A call that fails leaves the builder exactly as it was.

use crate::pipeline::{operators, CriterionFilter, RecordSorter, WindowSlicer};
use crate::record::{FieldValue, Record};

use super::criterion::Criterion;
use super::definition::QueryDefinition;
use super::errors::{QueryError, QueryResult};
use super::explain::{PlanStage, QueryExplain, StageKind};
use super::sort::{SortDirection, SortSpec};
use super::window::WindowSpec;

/// Fluent query over a fixed in-memory record collection
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    records: Vec<Record>,
    criteria: Vec<Criterion>,
    sort: Option<SortSpec>,
    window: Option<WindowSpec>,
}

impl QueryBuilder {
    /// Creates a builder over the given collection.
    ///
    /// The collection is fixed for the builder's lifetime and never mutated;
    /// results are clones of its records. Fails when the collection holds no
    /// records.
    pub fn new(records: Vec<Record>) -> QueryResult<Self> {
        if records.is_empty() {
            return Err(QueryError::EmptyCollection);
        }
        Ok(Self {
            records,
            criteria: Vec::new(),
            sort: None,
            window: None,
        })
    }

    /// Creates a builder and applies a whole definition through the same
    /// validating calls the chainable interface uses. The first invalid part
    /// aborts with its error.
    pub fn from_definition(
        records: Vec<Record>,
        definition: &QueryDefinition,
    ) -> QueryResult<Self> {
        let mut builder = Self::new(records)?;
        for criterion in &definition.criteria {
            builder.add_criterion(
                criterion.key.clone(),
                criterion.value.clone(),
                &criterion.operator,
            )?;
        }
        if let Some(sort) = &definition.sort {
            builder.sorted_by(sort.key.clone(), sort.direction.as_token())?;
        }
        if let Some(window) = &definition.window {
            builder.limit(window.offset, window.length)?;
        }
        Ok(builder)
    }

    /// Appends a filter criterion.
    ///
    /// Criteria combine as logical AND in accumulation order; the same key
    /// may appear any number of times. Fails when the operator token is not
    /// registered, leaving the accumulated criteria unchanged.
    pub fn add_criterion(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
        operator: &str,
    ) -> QueryResult<&mut Self> {
        if !operators::is_registered(operator) {
            return Err(QueryError::InvalidCriterionOperator(operator.to_string()));
        }
        self.criteria.push(Criterion::new(key, value, operator));
        Ok(self)
    }

    /// Appends a strict-equality criterion, the default operator
    pub fn add_equals(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> QueryResult<&mut Self> {
        self.add_criterion(key, value, operators::tokens::EQ)
    }

    /// Sets the sort, replacing any previous specification.
    ///
    /// The direction token must be exactly `ASC` or `DESC`; anything else
    /// fails and leaves the previous sort in place.
    pub fn sorted_by(&mut self, key: impl Into<String>, direction: &str) -> QueryResult<&mut Self> {
        let direction = SortDirection::from_token(direction)
            .ok_or_else(|| QueryError::InvalidSortDirection(direction.to_string()))?;
        self.sort = Some(SortSpec::new(key, direction));
        Ok(self)
    }

    /// Sets the window, replacing any previous specification.
    ///
    /// `offset` is the inclusive start and `length` the exclusive end bound
    /// of the slice. `length` is checked against the original collection's
    /// record count here and never re-checked, even though the slice later
    /// applies to the filtered survivors. A failed check leaves the previous
    /// window in place.
    pub fn limit(&mut self, offset: usize, length: usize) -> QueryResult<&mut Self> {
        let window = WindowSpec::new(offset, length);
        window.validate(self.records.len())?;
        self.window = Some(window);
        Ok(self)
    }

    /// Materializes the query: filter, slice, sort, project.
    ///
    /// Reading never mutates the builder; repeated calls under the same
    /// configuration return equal sequences.
    pub fn get_results(&self) -> Vec<Record> {
        let filtered = self.apply_criteria();
        let sliced = WindowSlicer::slice(filtered, self.window.as_ref());
        let sorted = RecordSorter::sort(sliced, self.sort.as_ref());
        sorted.into_iter().cloned().collect()
    }

    /// Number of records [`get_results`](Self::get_results) would return.
    /// Runs the full pipeline; there is no shortcut path.
    pub fn get_count(&self) -> usize {
        self.get_results().len()
    }

    /// Describes the configured pipeline without executing it
    pub fn explain(&self) -> QueryExplain {
        let filter = if self.criteria.is_empty() {
            "no criteria; the collection passes through unchanged".to_string()
        } else {
            format!(
                "narrow by {} criteria in successive AND passes",
                self.criteria.len()
            )
        };
        let window = match &self.window {
            Some(w) => format!(
                "keep positions [{}, {}) of the filtered records",
                w.offset, w.length
            ),
            None => "no window; pass-through".to_string(),
        };
        let sort = match &self.sort {
            Some(s) => format!("stable sort by '{}' {}", s.key, s.direction.as_token()),
            None => "no sort; input order preserved".to_string(),
        };
        QueryExplain {
            record_count: self.records.len(),
            criteria: self.criteria.iter().map(Criterion::to_string).collect(),
            sort: self.sort.clone(),
            window: self.window,
            stages: vec![
                PlanStage {
                    stage: StageKind::Filter,
                    description: filter,
                },
                PlanStage {
                    stage: StageKind::Window,
                    description: window,
                },
                PlanStage {
                    stage: StageKind::Sort,
                    description: sort,
                },
                PlanStage {
                    stage: StageKind::Project,
                    description: "clone surviving records into owned results".to_string(),
                },
            ],
        }
    }

    /// The collection the query runs over
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Accumulated criteria, in accumulation order
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Active sort specification
    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Active window specification
    pub fn window(&self) -> Option<&WindowSpec> {
        self.window.as_ref()
    }

    /// Successive AND-narrowing: each criterion filters the survivors of the
    /// previous one, in accumulation order. No criteria leaves the collection
    /// untouched.
    fn apply_criteria(&self) -> Vec<&Record> {
        let mut survivors: Vec<&Record> = self.records.iter().collect();
        for criterion in &self.criteria {
            survivors.retain(|record| {
                // Operators were validated when the criterion was accepted;
                // resolution cannot fail on this path.
                CriterionFilter::matches(criterion, record).unwrap_or(false)
            });
        }
        survivors
    }
}
