//! Serializable query configuration
//!
//! A [`QueryDefinition`] carries a whole configuration as plain data, so a
//! query can arrive as JSON. Nothing is validated on construction or
//! deserialization; a definition is checked when it is applied to a
//! collection, through the same calls the chainable interface uses.

use serde::{Deserialize, Serialize};

use super::criterion::Criterion;
use super::sort::SortSpec;
use super::window::WindowSpec;

/// A complete query configuration in data form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryDefinition {
    /// Criteria in accumulation order
    #[serde(default)]
    pub criteria: Vec<Criterion>,
    /// Optional sort specification
    #[serde(default)]
    pub sort: Option<SortSpec>,
    /// Optional window specification
    #[serde(default)]
    pub window: Option<WindowSpec>,
}

impl QueryDefinition {
    /// Creates an empty definition
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a criterion
    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Sets the sort specification
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the window specification
    pub fn with_window(mut self, window: WindowSpec) -> Self {
        self.window = Some(window);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_json_object_is_an_empty_definition() {
        let definition: QueryDefinition = serde_json::from_value(json!({})).unwrap();
        assert_eq!(definition, QueryDefinition::new());
        assert!(definition.criteria.is_empty());
        assert!(definition.sort.is_none());
        assert!(definition.window.is_none());
    }

    #[test]
    fn deserializes_a_full_configuration() {
        let definition: QueryDefinition = serde_json::from_value(json!({
            "criteria": [
                {"key": "age", "value": 18, "operator": ">="},
                {"key": "name", "value": "alice"},
            ],
            "sort": {"key": "age", "direction": "DESC"},
            "window": {"offset": 0, "length": 2},
        }))
        .unwrap();

        assert_eq!(definition.criteria.len(), 2);
        assert_eq!(definition.criteria[0].operator, ">=");
        assert_eq!(definition.criteria[1].operator, "=");
        assert_eq!(definition.sort, Some(SortSpec::desc("age")));
        assert_eq!(definition.window, Some(WindowSpec::new(0, 2)));
    }

    #[test]
    fn builder_style_construction_round_trips_through_json() {
        let definition = QueryDefinition::new()
            .with_criterion(Criterion::equals("state", "active"))
            .with_sort(SortSpec::asc("age"))
            .with_window(WindowSpec::new(1, 3));
        let json = serde_json::to_value(&definition).unwrap();
        let back: QueryDefinition = serde_json::from_value(json).unwrap();
        assert_eq!(back, definition);
    }
}
