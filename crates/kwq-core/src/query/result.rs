//! Results attached to a query

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// Results gathered for a query, as generic JSON values.
///
/// Results are compared element by element on their serialized text, so two
/// result sets are equal when they hold the same values in the same order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResult {
    pub results: Vec<Value>,
}

impl QueryResult {
    pub fn new(results: Vec<Value>) -> Self {
        Self { results }
    }

    /// Remove all results
    pub fn clear(&mut self) {
        self.results.clear();
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.results.get(index)
    }

    pub fn push(&mut self, result: Value) {
        self.results.push(result);
    }
}

impl PartialEq for QueryResult {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueryResult {}

impl Ord for QueryResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.results
            .iter()
            .map(Value::to_string)
            .cmp(other.results.iter().map(Value::to_string))
    }
}

impl PartialOrd for QueryResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
