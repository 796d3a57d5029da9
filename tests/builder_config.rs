//! Builder Configuration Tests
//!
//! Tests for configuration-time validation:
//! - Invalid tokens and bounds fail at the call that supplies them
//! - Failed calls leave all prior configuration intact
//! - Definitions apply through the same validating path as chained calls
//! - Explaining a query is read-only and serializable

use memquery::query::{
    Criterion, QueryBuilder, QueryDefinition, QueryError, SortSpec, WindowSpec,
};
use memquery::record::{records_from_json, Record};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn users() -> Vec<Record> {
    records_from_json(&json!([
        {"name": "alice", "age": 30, "state": "active"},
        {"name": "bob", "age": 25, "state": "inactive"},
        {"name": "carol", "age": 35, "state": "active"},
    ]))
    .unwrap()
}

// =============================================================================
// Fail-Fast Validation Tests
// =============================================================================

/// An unregistered operator token fails the `add_criterion` call itself.
#[test]
fn test_unknown_operator_rejected_at_add_time() {
    let mut builder = QueryBuilder::new(users()).unwrap();
    let err = builder.add_criterion("age", 30, "LIKE").unwrap_err();
    assert_eq!(err, QueryError::InvalidCriterionOperator("LIKE".to_string()));
    assert_eq!(err.code(), "MEMQ_INVALID_CRITERION_OPERATOR");
    assert_eq!(err.to_string(), "'LIKE' is not a valid criterion operator");
}

/// Direction tokens are the exact literals `ASC` and `DESC`.
#[test]
fn test_direction_tokens_are_case_sensitive() {
    let mut builder = QueryBuilder::new(users()).unwrap();
    assert!(builder.sorted_by("age", "ASC").is_ok());
    assert!(builder.sorted_by("age", "DESC").is_ok());
    for bad in ["asc", "desc", "Asc", "ascending", ""] {
        let err = builder.sorted_by("age", bad).unwrap_err();
        assert_eq!(err, QueryError::InvalidSortDirection(bad.to_string()));
    }
}

/// A window whose offset exceeds its end bound is rejected.
#[test]
fn test_offset_past_length_rejected() {
    let mut builder = QueryBuilder::new(users()).unwrap();
    let err = builder.limit(2, 1).unwrap_err();
    assert_eq!(err.code(), "MEMQ_INVALID_WINDOW");
    assert!(err.to_string().contains("offset 2 must not exceed length 1"));
}

/// A window reaching past the collection is rejected, at `limit` time.
#[test]
fn test_window_longer_than_collection_rejected() {
    let mut builder = QueryBuilder::new(users()).unwrap();
    let err = builder.limit(0, 4).unwrap_err();
    assert_eq!(err.code(), "MEMQ_INVALID_WINDOW");
    assert!(builder.limit(0, 3).is_ok());
}

// =============================================================================
// State On Error Tests
// =============================================================================

/// Every failed configuration call leaves the builder exactly as it was.
#[test]
fn test_failed_calls_leave_prior_configuration_intact() {
    let mut builder = QueryBuilder::new(users()).unwrap();
    builder
        .add_equals("state", "active")
        .unwrap()
        .sorted_by("age", "ASC")
        .unwrap()
        .limit(0, 2)
        .unwrap();
    let baseline = builder.get_results();

    assert!(builder.add_criterion("age", 1, "~").is_err());
    assert!(builder.sorted_by("age", "down").is_err());
    assert!(builder.limit(0, 9).is_err());
    assert!(builder.limit(3, 2).is_err());

    assert_eq!(builder.criteria().len(), 1);
    assert_eq!(builder.sort(), Some(&SortSpec::asc("age")));
    assert_eq!(builder.window(), Some(&WindowSpec::new(0, 2)));
    assert_eq!(builder.get_results(), baseline);
}

/// Replacement semantics: the last accepted sort and window win.
#[test]
fn test_later_calls_replace_sort_and_window() {
    let mut builder = QueryBuilder::new(users()).unwrap();
    builder.sorted_by("age", "ASC").unwrap();
    builder.sorted_by("name", "DESC").unwrap();
    builder.limit(0, 3).unwrap();
    builder.limit(1, 2).unwrap();
    assert_eq!(builder.sort(), Some(&SortSpec::desc("name")));
    assert_eq!(builder.window(), Some(&WindowSpec::new(1, 2)));
}

/// `add_equals` is shorthand for the `=` operator.
#[test]
fn test_add_equals_uses_the_default_operator() {
    let mut builder = QueryBuilder::new(users()).unwrap();
    builder.add_equals("state", "active").unwrap();
    assert_eq!(builder.criteria(), &[Criterion::equals("state", "active")]);
}

// =============================================================================
// Definition Tests
// =============================================================================

/// A JSON definition applies exactly like the equivalent chained calls.
#[test]
fn test_definition_from_json_applies_like_chained_calls() {
    let definition: QueryDefinition = serde_json::from_value(json!({
        "criteria": [{"key": "state", "value": "active"}],
        "sort": {"key": "age", "direction": "DESC"},
        "window": {"offset": 0, "length": 2},
    }))
    .unwrap();
    let from_definition = QueryBuilder::from_definition(users(), &definition).unwrap();

    let mut chained = QueryBuilder::new(users()).unwrap();
    chained
        .add_equals("state", "active")
        .unwrap()
        .sorted_by("age", "DESC")
        .unwrap()
        .limit(0, 2)
        .unwrap();

    assert_eq!(from_definition.get_results(), chained.get_results());
    assert_eq!(from_definition.get_count(), 2);
}

/// Definitions go through the same validation and fail with the same errors.
#[test]
fn test_definition_validation_matches_chained_errors() {
    let definition = QueryDefinition::new().with_criterion(Criterion::new("age", 1, "LIKE"));
    let err = QueryBuilder::from_definition(users(), &definition).unwrap_err();
    assert_eq!(err, QueryError::InvalidCriterionOperator("LIKE".to_string()));

    let definition = QueryDefinition::new().with_window(WindowSpec::new(0, 9));
    let err = QueryBuilder::from_definition(users(), &definition).unwrap_err();
    assert_eq!(err.code(), "MEMQ_INVALID_WINDOW");

    let err = QueryBuilder::from_definition(Vec::new(), &QueryDefinition::new()).unwrap_err();
    assert_eq!(err, QueryError::EmptyCollection);
}

/// A definition survives a serialize/deserialize round trip unchanged.
#[test]
fn test_definition_round_trips_through_json() {
    let definition = QueryDefinition::new()
        .with_criterion(Criterion::new("age", 18, ">="))
        .with_criterion(Criterion::equals("state", "active"))
        .with_sort(SortSpec::asc("name"))
        .with_window(WindowSpec::new(0, 3));
    let text = serde_json::to_string(&definition).unwrap();
    let back: QueryDefinition = serde_json::from_str(&text).unwrap();
    assert_eq!(back, definition);
}

// =============================================================================
// Explain Tests
// =============================================================================

/// Explaining lists the stages in pipeline order and does not run the query.
#[test]
fn test_explain_reports_the_pipeline() {
    let mut builder = QueryBuilder::new(users()).unwrap();
    builder
        .add_criterion("age", 25, ">=")
        .unwrap()
        .sorted_by("age", "ASC")
        .unwrap()
        .limit(0, 2)
        .unwrap();

    let explain = builder.explain();
    let stages: Vec<&str> = explain.stages.iter().map(|s| s.stage.as_str()).collect();
    assert_eq!(stages, vec!["filter", "window", "sort", "project"]);
    assert_eq!(explain.record_count, 3);
    assert_eq!(explain.criteria, vec!["age >= 25"]);

    // Explain is serializable for diagnostics.
    let rendered = serde_json::to_value(&explain).unwrap();
    assert_eq!(rendered["stages"][0]["stage"], "filter");
    assert_eq!(rendered["record_count"], 3);

    // And read-only: the query still materializes the same way.
    assert_eq!(builder.explain(), explain);
    assert_eq!(builder.get_count(), 2);
}

// =============================================================================
// JSON Boundary Tests
// =============================================================================

/// Materialized results render back to the JSON they were built from.
#[test]
fn test_results_render_as_json() {
    let mut builder = QueryBuilder::new(users()).unwrap();
    builder.add_equals("name", "bob").unwrap();
    let results = builder.get_results();
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].to_json(),
        json!({"name": "bob", "age": 25, "state": "inactive"})
    );
}
