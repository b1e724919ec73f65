//! kwq Core Engine
//!
//! Compiles DIS-style keyword queries, the keyword/operator/literal triples
//! linked by `and`, `or`, `not` and grouped with parentheses, into a postfix
//! element sequence a catalog can evaluate, plus the fields named by `RETURN`
//! clauses.
//!
//! # Example
//!
//! ```rust
//! use kwq_core::{parse, QueryElement};
//!
//! let parsed = parse("x = \"Fish Poop\" and RETURN > fish and y = 'Monkey Poop'").unwrap();
//! assert_eq!(parsed.selectors, vec![QueryElement::elem_name("fish")]);
//! assert_eq!(parsed.expression.last().map(|e| e.value()), Some("AND"));
//! ```

pub mod error;
pub mod json;
pub mod parser;
pub mod query;

// Re-export main types at crate root
pub use error::{ExpressionParseError, ParseResult, QueryError};
pub use json::parse_query_json;
pub use parser::{
    parse, parse_with_config, LogOp, ParsedQuery, Parser, ParserConfig, DEFAULT_MAX_DEPTH,
    MAX_DEPTH_CEILING,
};
pub use query::{Query, QueryElement, QueryHeader, QueryResult, Role};
