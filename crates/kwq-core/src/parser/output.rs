//! Compiled query output

use serde::{Deserialize, Serialize};

use crate::query::QueryElement;

/// A compiled keyword query.
///
/// `expression` is the boolean filter in postfix order: every comparison is
/// three consecutive elements `(elemName, LITERAL, RELOP)` and connectives
/// follow their operands. `selectors` holds the fields named by RETURN
/// clauses, in the order they were written.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub expression: Vec<QueryElement>,
    pub selectors: Vec<QueryElement>,
}

impl ParsedQuery {
    pub fn is_empty(&self) -> bool {
        self.expression.is_empty() && self.selectors.is_empty()
    }

    /// Split into `(expression, selectors)`
    pub fn into_parts(self) -> (Vec<QueryElement>, Vec<QueryElement>) {
        (self.expression, self.selectors)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
